//! Rule file loading
//!
//! Loads literal rules from TOML files and appends them to a catalog, in the
//! order the files are given.

use crate::constants::MAX_TOML_FILE_SIZE;
use crate::{Catalog, Result, RuleError, TomlRule, TomlRuleFile};
use std::path::{Path, PathBuf};

/// Loads user rule files on top of a catalog
#[derive(Debug, Clone, Default)]
pub struct RuleLoader {
    files: Vec<PathBuf>,
}

impl RuleLoader {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Load every rule from every file, in file order
    pub fn load_all(&self) -> Result<Vec<TomlRule>> {
        let mut all_rules = Vec::new();
        for path in &self.files {
            all_rules.extend(Self::load_from_file(path)?);
        }
        Ok(all_rules)
    }

    /// Append every loaded rule to `catalog`
    ///
    /// Rules join their category at the end, so built-in rules keep
    /// precedence. Returns the number of rules added. Nothing is added when
    /// any file fails to load or compile.
    pub fn apply_to(&self, catalog: &mut Catalog) -> Result<usize> {
        let mut compiled = Vec::new();
        for toml_rule in self.load_all()? {
            let rule = toml_rule.to_rule().map_err(|e| RuleError::LoadError {
                path: format!("rule '{}'", toml_rule.name),
                source: Box::new(e),
            })?;
            compiled.push((toml_rule.category, rule));
        }

        let added = compiled.len();
        for (category, rule) in compiled {
            catalog.add_rule(&category, rule);
        }
        Ok(added)
    }

    /// Load rules from a single TOML file
    pub fn load_from_file(path: &Path) -> Result<Vec<TomlRule>> {
        // Security: Check file size before reading
        let metadata = std::fs::metadata(path).map_err(|e| RuleError::LoadError {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        if metadata.len() > MAX_TOML_FILE_SIZE {
            return Err(RuleError::FileTooLarge {
                path: path.display().to_string(),
                size: metadata.len(),
                max_allowed: MAX_TOML_FILE_SIZE,
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|e| RuleError::LoadError {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        let file: TomlRuleFile = toml::from_str(&contents).map_err(|e| RuleError::LoadError {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        Ok(file.rules)
    }
}
