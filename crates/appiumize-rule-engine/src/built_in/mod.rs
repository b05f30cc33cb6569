//! Built-in Perfecto to Appium rules compiled into the binary
//!
//! Categories are listed in precedence order. Patterns match the
//! `driver.executeScript("mobile:<family>:<command>", "{'key':'value'}")`
//! form Perfecto Java scripts use, including the
//! `((JavascriptExecutor) driver).executeScript(...)` cast.

mod application;
mod checks;
mod device;
mod elements;
mod environment;
mod gestures;

use crate::{Catalog, ReplaceError, Result, RuleMatch};

pub const ELEMENT_FINDING: &str = "element-finding";
pub const APPLICATION: &str = "application";
pub const DEVICE: &str = "device";
pub const KEYBOARD: &str = "keyboard";
pub const GESTURES: &str = "gestures";
pub const SCROLLING: &str = "scrolling";
pub const ASSERTIONS: &str = "assertions";
pub const GEOLOCATION: &str = "geolocation";
pub const NOTIFICATIONS: &str = "notifications";
pub const TIMERS: &str = "timers";
pub const BROWSER: &str = "browser";
pub const NETWORK: &str = "network";

/// Build the built-in catalog
///
/// # Example
///
/// ```
/// use appiumize_rule_engine::load_built_in_catalog;
///
/// let catalog = load_built_in_catalog().expect("Failed to load built-in rules");
/// assert_eq!(catalog.categories()[0].name(), "element-finding");
/// ```
pub fn load_built_in_catalog() -> Result<Catalog> {
    Catalog::new()
        .with_category(ELEMENT_FINDING, elements::rules()?)?
        .with_category(APPLICATION, application::rules()?)?
        .with_category(DEVICE, device::device_rules()?)?
        .with_category(KEYBOARD, device::keyboard_rules()?)?
        .with_category(GESTURES, gestures::gesture_rules()?)?
        .with_category(SCROLLING, gestures::scrolling_rules()?)?
        .with_category(ASSERTIONS, checks::assertion_rules()?)?
        .with_category(GEOLOCATION, environment::geolocation_rules()?)?
        .with_category(NOTIFICATIONS, environment::notification_rules()?)?
        .with_category(TIMERS, checks::timer_rules()?)?
        .with_category(BROWSER, environment::browser_rules()?)?
        .with_category(NETWORK, environment::network_rules()?)
}

/// The object `executeScript` is called on, with or without a cast
const RECEIVER: &str = r"(?:\(\(\s*[A-Za-z_][\w.]*\s*\)\s*(?P<cast>[A-Za-z_][\w.]*)\s*\)|(?P<driver>[A-Za-z_][\w.]*))";

/// Receiver reference for literal templates; exactly one group participates
pub(crate) const DRIVER: &str = "${cast}${driver}";

/// Extra parameters after the ones a rule cares about
pub(crate) const REST: &str = r#"(?:\s*,[^"}]*)?"#;

/// Separator between two parameters
pub(crate) const SEP: &str = r"\s*,\s*";

fn call(command: &str) -> String {
    format!(r#"{RECEIVER}\.executeScript\(\s*"{}""#, regex::escape(command))
}

/// A whole `executeScript` statement with a `"{...}"` parameter string
///
/// The trailing `;` is consumed, so replacements end their own statements.
pub(crate) fn script(command: &str, params: &str) -> String {
    format!(r#"{}\s*,\s*"\{{\s*{params}\s*\}}"\s*\)[ \t]*;?"#, call(command))
}

/// Like [`script`] but leaves any `;` in place, for calls used as values
pub(crate) fn script_expr(command: &str, params: &str) -> String {
    format!(r#"{}\s*,\s*"\{{\s*{params}\s*\}}"\s*\)"#, call(command))
}

/// A statement whose parameters are ignored
///
/// Accepts any parameter string, a variable, or no second argument at all.
pub(crate) fn script_bare(command: &str) -> String {
    format!(
        r#"{}\s*(?:,\s*(?:"\{{[^"}}]*\}}"|[A-Za-z_]\w*))?\s*\)[ \t]*;?"#,
        call(command)
    )
}

/// `'key':'value'` captured into `group`
pub(crate) fn quoted(key: &str, group: &str) -> String {
    format!(r"'{key}'\s*:\s*'(?P<{group}>[^']*)'")
}

/// `'key':N` or `'key':'N'` captured into `group`
pub(crate) fn number(key: &str, group: &str) -> String {
    format!(r"'{key}'\s*:\s*'?(?P<{group}>\d+(?:\.\d+)?)'?")
}

/// `'key':'x,y'` captured into `<prefix>x` and `<prefix>y`
pub(crate) fn point(key: &str, prefix: &str) -> String {
    format!(r"'{key}'\s*:\s*'?(?P<{prefix}x>[^',]+),(?P<{prefix}y>[^',}}]+)'?")
}

/// Split a Perfecto parameter string into key/value pairs
///
/// Keys and values may be single-quoted; a quoted value may contain commas
/// (`'location':'10,20'`). Parsing stops at the first fragment without a
/// `:`.
pub(crate) fn params(raw: &str) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    let mut rest = raw;
    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        let Some((key, after)) = rest.split_once(':') else {
            break;
        };
        let after = after.trim_start();
        let (value, tail) = match after.strip_prefix('\'') {
            Some(quoted) => quoted.split_once('\'').unwrap_or((quoted, "")),
            None => match after.split_once(',') {
                Some((value, tail)) => (value.trim_end(), tail),
                None => (after.trim_end(), ""),
            },
        };
        pairs.push((key.trim().trim_matches('\''), value));
        rest = tail;
    }
    pairs
}

/// Value of `key` in parsed parameters, compared case-insensitively
pub(crate) fn param<'a>(pairs: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| *v)
}

/// The receiver of a computed match
pub(crate) fn receiver<'h>(m: &RuleMatch<'h, '_>) -> std::result::Result<&'h str, ReplaceError> {
    m.name("driver")
        .or_else(|| m.name("cast"))
        .ok_or_else(|| ReplaceError::MissingGroup("driver".to_string()))
}

/// Turn a free-form id into a Java identifier
pub(crate) fn java_identifier(raw: &str) -> String {
    let mut ident: String = raw
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() {
        ident.push_str("perfecto");
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
