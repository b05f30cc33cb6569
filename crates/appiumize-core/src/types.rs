//! Records returned by the conversion and validation operations.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Target platform for a conversion.
///
/// The two platforms are mutually exclusive: every platform branch emitted
/// by a rule resolves to exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Ios,
}

impl Platform {
    /// Returns all platforms in a consistent order
    pub fn all() -> &'static [Platform] {
        &[Platform::Android, Platform::Ios]
    }

    /// Returns the lowercase name used in CLI flags and tool arguments
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }

    /// Returns the platform that is not `self`
    pub fn other(&self) -> Platform {
        match self {
            Platform::Android => Platform::Ios,
            Platform::Ios => Platform::Android,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            _ => Err(Error::UnknownPlatform {
                value: s.to_string(),
            }),
        }
    }
}

/// Outcome tag shared by every result record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Result of rewriting one source blob.
///
/// On failure `converted_code` and `rules_applied_count` are absent and
/// `original_code` still carries the exact input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub status: Status,
    pub original_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_code: Option<String>,
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_applied_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ConversionResult {
    /// Build a successful conversion record
    pub fn success(
        original_code: impl Into<String>,
        converted_code: String,
        platform: Platform,
        rules_applied_count: usize,
    ) -> Self {
        Self {
            status: Status::Success,
            original_code: original_code.into(),
            converted_code: Some(converted_code),
            platform,
            rules_applied_count: Some(rules_applied_count),
            message: None,
        }
    }

    /// Build a failed conversion record carrying the untouched input
    pub fn failure(original_code: impl Into<String>, platform: Platform, message: String) -> Self {
        Self {
            status: Status::Error,
            original_code: original_code.into(),
            converted_code: None,
            platform,
            rules_applied_count: None,
            message: Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Result of the read-only convertibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub status: Status,
    pub is_convertible: bool,
    pub matching_patterns: Vec<String>,
    pub matched_categories: Vec<String>,
    pub is_perfecto_code: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    /// Build a successful validation record.
    ///
    /// `is_convertible` is derived: any matched pattern or a fired marker
    /// heuristic makes the code convertible.
    pub fn success(
        matching_patterns: Vec<String>,
        matched_categories: Vec<String>,
        is_perfecto_code: bool,
    ) -> Self {
        Self {
            status: Status::Success,
            is_convertible: !matching_patterns.is_empty() || is_perfecto_code,
            matching_patterns,
            matched_categories,
            is_perfecto_code,
            message: None,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            status: Status::Error,
            is_convertible: false,
            matching_patterns: Vec::new(),
            matched_categories: Vec::new(),
            is_perfecto_code: false,
            message: Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Result of converting a file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConversionResult {
    pub status: Status,
    pub input_file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_applied_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FileConversionResult {
    pub fn success(
        input_file: PathBuf,
        output_file: PathBuf,
        platform: Platform,
        rules_applied_count: usize,
    ) -> Self {
        Self {
            status: Status::Success,
            input_file,
            output_file: Some(output_file),
            platform: Some(platform),
            rules_applied_count: Some(rules_applied_count),
            message: Some("File converted successfully".to_string()),
        }
    }

    pub fn failure(input_file: PathBuf, message: String) -> Self {
        Self {
            status: Status::Error,
            input_file,
            output_file: None,
            platform: None,
            rules_applied_count: None,
            message: Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
