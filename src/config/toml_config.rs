use crate::core::menu::MenuSettings;
use crate::utils::error::{QuestError, Result};
use crate::utils::logger::DEFAULT_LEVEL;
use crate::utils::validation::{validate_log_level, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub clear_screen: bool,
    pub pause_after_item: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let defaults = MenuSettings::default();
        Self {
            title: defaults.title,
            clear_screen: defaults.clear_screen,
            pause_after_item: defaults.pause_after_item,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| QuestError::ConfigError {
            message: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuestError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuestError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("display.title", &self.display.title).map_err(|_| {
            QuestError::ConfigValidationError {
                field: "display.title".to_string(),
                message: "title cannot be empty".to_string(),
            }
        })?;
        validate_log_level("logging.level", &self.logging.level)?;
        Ok(())
    }

    pub fn menu_settings(&self) -> MenuSettings {
        MenuSettings {
            title: self.display.title.clone(),
            clear_screen: self.display.clear_screen,
            pause_after_item: self.display.pause_after_item,
        }
    }

    pub fn log_level(&self) -> String {
        self.logging.level.to_ascii_lowercase()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.menu_settings(), MenuSettings::default());
        assert_eq!(config.log_level(), "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[display]
title = "Classroom Demos"
clear_screen = false

[logging]
level = "DEBUG"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.display.title, "Classroom Demos");
        assert!(!config.display.clear_screen);
        assert!(config.display.pause_after_item);
        assert_eq!(config.log_level(), "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PP_QUEST_TEST_TITLE", "From Env");

        let toml_content = r#"
[display]
title = "${PP_QUEST_TEST_TITLE}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.display.title, "From Env");

        std::env::remove_var("PP_QUEST_TEST_TITLE");
    }

    #[test]
    fn test_unset_variable_is_left_verbatim() {
        let config = AppConfig::from_toml_str(
            "[display]\ntitle = \"${PP_QUEST_SURELY_UNSET_VARIABLE}\"\n",
        )
        .unwrap();
        assert_eq!(config.display.title, "${PP_QUEST_SURELY_UNSET_VARIABLE}");
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::from_toml_str("[display]\ntitle = \"  \"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(QuestError::ConfigValidationError { .. })
        ));

        let config = AppConfig::from_toml_str("[logging]\nlevel = \"chatty\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            AppConfig::from_toml_str("[display\ntitle = 1"),
            Err(QuestError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\npause_after_item = false\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert!(!config.display.pause_after_item);
        assert!(AppConfig::from_file("/definitely/not/here.toml").is_err());
    }
}
