//! PerfectoMobileBy locators to Selenium / Appium locators

use crate::{Result, Rule};

/// (locator method, replacement call, rule name)
const LOCATORS: &[(&str, &str, &str)] = &[
    ("id", "By.id", "perfecto-by-id"),
    ("name", "By.name", "perfecto-by-name"),
    ("xpath", "By.xpath", "perfecto-by-xpath"),
    ("className", "By.className", "perfecto-by-class-name"),
    ("accessibilityId", "AppiumBy.accessibilityId", "perfecto-by-accessibility-id"),
    ("linkText", "By.linkText", "perfecto-by-link-text"),
    ("cssSelector", "By.cssSelector", "perfecto-by-css-selector"),
];

pub(super) fn rules() -> Result<Vec<Rule>> {
    LOCATORS
        .iter()
        .map(|(method, target, name)| {
            Rule::literal(
                *name,
                &format!(r#"PerfectoMobileBy\.{method}\(\s*"((?:[^"\\]|\\.)*)"\s*\)"#),
                format!(r#"{target}("$1")"#),
                format!("Convert PerfectoMobileBy.{method} to {target}"),
            )
        })
        .collect()
}
