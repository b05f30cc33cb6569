use crate::types::Settings;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Settings that parse but cannot be used
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecurityError {
    #[error("Output prefix must not be empty")]
    EmptyOutputPrefix,

    #[error("Output prefix '{0}' must not contain path separators or control characters")]
    InvalidOutputPrefix(String),

    #[error("Unknown log level '{0}'; expected trace, debug, info, warn or error")]
    InvalidLogLevel(String),
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate an output file prefix
///
/// The prefix is joined onto a file name, so it must not be able to move
/// the output into another directory.
pub fn validate_output_prefix(prefix: &str) -> Result<(), SecurityError> {
    if prefix.is_empty() {
        return Err(SecurityError::EmptyOutputPrefix);
    }

    if prefix.contains(['/', '\\']) || prefix.contains("..") || prefix.chars().any(|c| c.is_control()) {
        return Err(SecurityError::InvalidOutputPrefix(prefix.to_string()));
    }

    Ok(())
}

pub fn validate_log_level(level: &str) -> Result<(), SecurityError> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(SecurityError::InvalidLogLevel(level.to_string()))
    }
}

/// Validate every setting that has constraints beyond its type
pub fn validate_settings(settings: &Settings) -> Result<(), SecurityError> {
    validate_output_prefix(&settings.output_prefix)?;
    validate_log_level(&settings.log_level)
}

/// Set restrictive permissions on config file (Unix only)
#[cfg(unix)]
pub fn set_config_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o600); // rw------- (user read/write only)
    fs::set_permissions(path, perms)?;
    Ok(())
}

/// Set config permissions (no-op on Windows for now)
#[cfg(not(unix))]
pub fn set_config_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_prefixes() {
        assert!(validate_output_prefix("converted_").is_ok());
        assert!(validate_output_prefix("appium-").is_ok());
    }

    #[test]
    fn test_invalid_prefixes() {
        assert_eq!(validate_output_prefix(""), Err(SecurityError::EmptyOutputPrefix));
        assert!(validate_output_prefix("../out_").is_err());
        assert!(validate_output_prefix("out/").is_err());
        assert!(validate_output_prefix("a\\b").is_err());
        assert!(validate_output_prefix("tab\t").is_err());
    }

    #[test]
    fn test_log_levels() {
        assert!(validate_log_level("debug").is_ok());
        assert!(validate_log_level("WARN").is_ok());
        assert!(matches!(
            validate_log_level("verbose"),
            Err(SecurityError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_set_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "test").unwrap();

        set_config_permissions(&config_path).unwrap();

        let metadata = fs::metadata(&config_path).unwrap();
        let permissions = metadata.permissions();
        assert_eq!(permissions.mode() & 0o777, 0o600);
    }
}
