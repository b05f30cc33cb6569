//! Ordered, named rule categories
//!
//! The catalog's order is its precedence: categories in declaration order,
//! rules in declaration order within each category. Nothing outside this
//! module knows which categories exist.

use crate::{Result, Rule, RuleError};

/// A named, ordered group of rules
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    rules: Vec<Rule>,
}

impl Category {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether one of this category's rules has exactly this pattern text
    pub fn owns_pattern(&self, pattern: &str) -> bool {
        self.rules.iter().any(|rule| rule.pattern_str() == pattern)
    }
}

/// The full rule table, read-only once built
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new category after all existing ones
    pub fn push_category(&mut self, category: Category) -> Result<()> {
        if self.category(category.name()).is_some() {
            return Err(RuleError::DuplicateCategory(category.name().to_string()));
        }
        self.categories.push(category);
        Ok(())
    }

    /// Builder-style [`Catalog::push_category`]
    pub fn with_category(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Result<Self> {
        self.push_category(Category::new(name, rules))?;
        Ok(self)
    }

    /// Append a rule to the end of `category`, creating the category at the
    /// end of the catalog if it does not exist yet
    pub fn add_rule(&mut self, category: &str, rule: Rule) {
        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.rules.push(rule),
            None => self.categories.push(Category::new(category, vec![rule])),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// All rules, flattened in precedence order
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.categories.iter().flat_map(|c| c.rules.iter())
    }

    /// Total number of rules
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.rules.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
