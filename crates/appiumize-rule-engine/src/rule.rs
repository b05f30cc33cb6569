//! Rewrite rules and their replacement forms
//!
//! A rule is a compiled pattern plus either a literal template or a computed
//! replacement. Patterns are plain `regex::Regex` values: they keep no scan
//! position, so every application starts from the beginning of the buffer it
//! is given.

use crate::constants::{MAX_REGEX_LENGTH, REGEX_DFA_SIZE_LIMIT, REGEX_SIZE_LIMIT};
use crate::swipe::CoordinateError;
use crate::{Result, RuleError};
use regex::{Captures, Regex, RegexBuilder};

/// Compile a regex with size limits to prevent ReDoS attacks
///
/// - Pattern length limit (500 chars)
/// - Compiled regex size limit (10MB)
/// - DFA size limit (2MB)
pub(crate) fn compile_regex_safe(pattern: &str) -> Result<Regex> {
    if pattern.len() > MAX_REGEX_LENGTH {
        return Err(RuleError::InvalidPattern(format!(
            "Pattern exceeds maximum length of {} characters",
            MAX_REGEX_LENGTH
        )));
    }

    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .dfa_size_limit(REGEX_DFA_SIZE_LIMIT)
        .build()
        .map_err(|e| RuleError::InvalidPattern(e.to_string()))
}

/// Failure raised by a computed replacement
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReplaceError {
    #[error("capture group `{0}` did not participate in the match")]
    MissingGroup(String),

    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    #[error("{0}")]
    Unsupported(String),
}

/// One match handed to a computed replacement
///
/// Besides the captured groups it carries the leading whitespace of the line
/// the match starts on, so multi-line output can keep the caller's
/// indentation.
pub struct RuleMatch<'h, 'c> {
    captures: &'c Captures<'h>,
    indent: &'h str,
}

impl<'h, 'c> RuleMatch<'h, 'c> {
    pub(crate) fn new(captures: &'c Captures<'h>, indent: &'h str) -> Self {
        Self { captures, indent }
    }

    /// The whole matched text
    pub fn full(&self) -> &'h str {
        self.captures.get(0).map_or("", |m| m.as_str())
    }

    /// A positional group, if it participated in the match
    pub fn group(&self, index: usize) -> Option<&'h str> {
        self.captures.get(index).map(|m| m.as_str())
    }

    /// A named group, if it participated in the match
    pub fn name(&self, name: &str) -> Option<&'h str> {
        self.captures.name(name).map(|m| m.as_str())
    }

    /// A named group that must be present
    pub fn require(&self, name: &str) -> std::result::Result<&'h str, ReplaceError> {
        self.name(name)
            .ok_or_else(|| ReplaceError::MissingGroup(name.to_string()))
    }

    /// Leading whitespace of the line the match starts on
    pub fn indent(&self) -> &'h str {
        self.indent
    }
}

/// Signature of a computed replacement
pub type ComputeFn = fn(&RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError>;

/// How a rule produces its replacement text
#[derive(Debug, Clone)]
pub enum Replacement {
    /// Template with `$1` / `${name}` group references
    Literal(String),
    /// Function of the match; its output is spliced in verbatim
    Computed(ComputeFn),
}

/// A single rewrite rule
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    pattern: Regex,
    replacement: Replacement,
    description: String,
}

impl Rule {
    /// Create a rule with a literal replacement template
    pub fn literal(
        name: impl Into<String>,
        pattern: &str,
        template: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            pattern: compile_regex_safe(pattern)?,
            replacement: Replacement::Literal(template.into()),
            description: description.into(),
        })
    }

    /// Create a rule with a computed replacement
    pub fn computed(
        name: impl Into<String>,
        pattern: &str,
        compute: ComputeFn,
        description: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            pattern: compile_regex_safe(pattern)?,
            replacement: Replacement::Computed(compute),
            description: description.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The pattern's source text, used to identify the rule in reports
    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &Replacement {
        &self.replacement
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Test the pattern without replacing anything
    pub fn is_match(&self, haystack: &str) -> bool {
        self.pattern.is_match(haystack)
    }

    /// Replace every non-overlapping match in `haystack`
    ///
    /// Returns `Ok(None)` when the pattern does not match at all, so callers
    /// can count the rules that actually fired.
    pub fn apply(&self, haystack: &str) -> std::result::Result<Option<String>, ReplaceError> {
        let mut output = String::with_capacity(haystack.len());
        let mut last_end = 0;
        let mut matched = false;

        for captures in self.pattern.captures_iter(haystack) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            matched = true;
            output.push_str(&haystack[last_end..whole.start()]);

            match &self.replacement {
                Replacement::Literal(template) => captures.expand(template, &mut output),
                Replacement::Computed(compute) => {
                    let indent = line_indent(haystack, whole.start());
                    output.push_str(&compute(&RuleMatch::new(&captures, indent))?);
                }
            }

            last_end = whole.end();
        }

        if !matched {
            return Ok(None);
        }

        output.push_str(&haystack[last_end..]);
        Ok(Some(output))
    }
}

/// Leading spaces/tabs of the line containing byte offset `at`
fn line_indent(haystack: &str, at: usize) -> &str {
    let line_start = haystack[..at].rfind('\n').map_or(0, |i| i + 1);
    let line = &haystack[line_start..at];
    let indent_len = line
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    &line[..indent_len]
}
