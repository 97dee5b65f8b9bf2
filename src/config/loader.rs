//! Reads plugin options from a project directory.

use std::path::Path;

use super::{
    ConfigError,
    ExtractOptions,
};

/// Name of the options file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = ".extract-drupal-t.json";

/// Reads `.extract-drupal-t.json` from `dir`.
///
/// # Returns
/// - `Ok(Some(options))`: the file exists and parsed
/// - `Ok(None)`: no file
///
/// # Errors
/// - File read error
/// - JSON parse error
pub(super) fn load_from_dir(dir: &Path) -> Result<Option<ExtractOptions>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let options: ExtractOptions = serde_json::from_str(&content)?;

    Ok(Some(options))
}

/// Loads and validates options for `dir`, falling back to defaults when no
/// options file exists.
pub fn load_options(dir: &Path) -> Result<ExtractOptions, ConfigError> {
    let options = load_from_dir(dir)?.unwrap_or_default();
    options.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!(?options, "Options loaded");
    Ok(options)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::extractor::MatchMode;

    /// `load_from_dir`: options file present
    #[rstest]
    fn test_load_from_dir_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"matchMode": "balanced"}"#).unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_ok());
        let options = result.unwrap();
        assert!(options.is_some());
        assert_eq!(options.unwrap().match_mode, MatchMode::Balanced);
    }

    /// `load_from_dir`: no options file
    #[rstest]
    fn test_load_from_dir_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    /// `load_from_dir`: JSON parse error
    #[rstest]
    fn test_load_from_dir_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// `load_options`: defaults when the file is missing
    #[rstest]
    fn test_load_options_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let options = load_options(temp_dir.path()).unwrap();

        assert_eq!(options, ExtractOptions::default());
    }

    /// `load_options`: invalid glob fails validation
    #[rstest]
    fn test_load_options_rejects_invalid_glob() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"exclude": ["ok/**", "[bad"]}"#)
            .unwrap();

        let result = load_options(temp_dir.path());

        let errors = match result {
            Err(ConfigError::ValidationErrors(errors)) => errors,
            other => panic!("expected validation errors, got {other:?}"),
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field_path, "exclude[1]");
    }
}
