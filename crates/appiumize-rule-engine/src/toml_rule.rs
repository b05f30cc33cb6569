//! TOML rule definitions and types
//!
//! This module defines the structure of rules as they appear in TOML files.
//! File rules are always literal: a pattern plus a `$1` / `${name}` template.

use crate::{Result, Rule};
use serde::{Deserialize, Serialize};

/// A complete TOML rule file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TomlRuleFile {
    /// List of rules
    #[serde(default)]
    pub rules: Vec<TomlRule>,
}

/// A single rule as written in TOML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TomlRule {
    /// Category the rule is appended to; unknown categories are created
    /// after the built-in ones
    pub category: String,

    /// Rule name (for debugging and `rules` listings)
    pub name: String,

    /// Regular expression matched against the source
    pub pattern: String,

    /// Replacement template
    pub replacement: String,

    #[serde(default)]
    pub description: String,
}

impl TomlRule {
    /// Compile into an engine rule
    pub fn to_rule(&self) -> Result<Rule> {
        Rule::literal(
            self.name.as_str(),
            &self.pattern,
            self.replacement.as_str(),
            self.description.as_str(),
        )
    }
}
