//! Limits applied when compiling rule patterns and loading rule files
//!
//! Built-in patterns are well under these limits; they exist for rules
//! that arrive from TOML files.

/// Maximum size for TOML rule files (1MB)
pub const MAX_TOML_FILE_SIZE: u64 = 1_048_576; // 1MB

/// Maximum regex pattern length (500 characters)
///
/// Long patterns are usually a sign of a generated or malicious rule file
/// and are rejected before compilation.
pub const MAX_REGEX_LENGTH: usize = 500;

/// Compiled regex size limit (10MB)
///
/// Applied during regex compilation via RegexBuilder.
pub const REGEX_SIZE_LIMIT: usize = 10_000_000; // 10MB

/// Regex DFA size limit (2MB)
pub const REGEX_DFA_SIZE_LIMIT: usize = 2_000_000; // 2MB
