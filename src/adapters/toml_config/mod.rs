// TOML config adapter - Batch settings from a TOML file

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::Settings;
use crate::ports::*;

/// TOML configuration adapter
pub struct TomlConfigAdapter {
    config_file_path: PathBuf,
}

impl TomlConfigAdapter {
    /// Create new TOML config adapter for the given file
    pub fn new(config_file_path: impl Into<PathBuf>) -> Self {
        Self {
            config_file_path: config_file_path.into(),
        }
    }

    /// Deserialize settings from a TOML string.
    ///
    /// Every key is required except `crop.carry_over`; unknown keys are rejected.
    pub fn deserialize_settings(toml_content: &str) -> Result<Settings, DomainError> {
        let settings: Settings = toml::from_str(toml_content)
            .map_err(|e| DomainError::BadConfig(format!("Failed to parse TOML config: {}", e)))?;

        // Filter lines are checked here so a typo fails before any file is listed
        settings.filter_variants()?;

        if !(settings.image.size.is_finite() && settings.image.size > 0.0) {
            return Err(DomainError::BadConfig(format!(
                "image.size must be a positive number, got {}",
                settings.image.size
            )));
        }

        Ok(settings)
    }
}

impl ConfigPort for TomlConfigAdapter {
    fn load_settings(&self) -> Result<Settings, DomainError> {
        let content = std::fs::read_to_string(&self.config_file_path).map_err(|e| {
            DomainError::BadConfig(format!(
                "Failed to read config file {}: {}",
                self.config_file_path.display(),
                e
            ))
        })?;

        let settings = Self::deserialize_settings(&content)?;
        info!(path = %self.config_file_path.display(), "Loaded configuration");
        Ok(settings)
    }

    fn config_file_path(&self) -> &Path {
        &self.config_file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = r#"
[path]
input = "media/input"
output = "media/output"
image = "media/images/logo.png"
audio = "media/audio"
arrow = "media/arrows"

[crop]
start = 2
end = 10

[fadein]
duration = 1

[image]
duration = 3
size = 0.5

[filter]
unq_params = """Filters
warm=eq=saturation=1.3
cold=hue=h=20"""
"#;

    #[test]
    fn test_deserialize_valid_settings() {
        let settings = TomlConfigAdapter::deserialize_settings(VALID).unwrap();
        assert_eq!(settings.crop.start, 2);
        assert_eq!(settings.crop.end, 10);
        assert!(!settings.crop.carry_over);
        assert_eq!(settings.fadein.duration, 1);
        assert_eq!(settings.image.size, 0.5);
        assert_eq!(settings.path.image, PathBuf::from("media/images/logo.png"));
        assert_eq!(settings.filter_variants().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let without_fade = VALID.replace("[fadein]\nduration = 1\n", "");
        let err = TomlConfigAdapter::deserialize_settings(&without_fade).unwrap_err();
        assert!(matches!(err, DomainError::BadConfig(_)));
    }

    #[test]
    fn test_non_numeric_value_is_an_error() {
        let bad = VALID.replace("end = 10", "end = \"ten\"");
        let err = TomlConfigAdapter::deserialize_settings(&bad).unwrap_err();
        assert!(matches!(err, DomainError::BadConfig(_)));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let bad = VALID.replace("end = 10", "end = 10\nspeed = 2");
        assert!(TomlConfigAdapter::deserialize_settings(&bad).is_err());
    }

    #[test]
    fn test_bad_filter_line_is_an_error() {
        let bad = VALID.replace("cold=hue=h=20", "hflip");
        let err = TomlConfigAdapter::deserialize_settings(&bad).unwrap_err();
        assert_eq!(err, DomainError::InvalidFilterEntry("hflip".to_string()));
    }

    #[test]
    fn test_carry_over_flag() {
        let with_carry = VALID.replace("end = 10", "end = 10\ncarry_over = true");
        let settings = TomlConfigAdapter::deserialize_settings(&with_carry).unwrap();
        assert!(settings.crop.carry_over);
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, VALID).unwrap();

        let adapter = TomlConfigAdapter::new(&path);
        assert_eq!(adapter.config_file_path(), path.as_path());
        assert_eq!(adapter.load_settings().unwrap().crop.end, 10);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let adapter = TomlConfigAdapter::new(temp.path().join("config.toml"));
        assert!(matches!(
            adapter.load_settings(),
            Err(DomainError::BadConfig(_))
        ));
    }
}
