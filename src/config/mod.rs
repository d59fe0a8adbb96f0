pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, Direction};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::error::{MorseError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "morse-translator")]
#[command(about = "Translate between plain text and Morse code notation")]
pub struct CliConfig {
    /// Text to translate; read from standard input when omitted
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub text: Vec<String>,

    /// Translation mode: text-to-morse or morse-to-text
    #[arg(short, long)]
    pub mode: Option<Direction>,

    /// Translate line by line until :quit
    #[arg(short, long)]
    pub interactive: bool,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔（若有）並套用命令列覆蓋
    pub fn resolve(&self) -> Result<Settings> {
        self.validate()?;

        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        Ok(Settings::merge(file, self.mode))
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }

        if self.interactive && !self.text.is_empty() {
            return Err(MorseError::ConfigValidationError {
                field: "text".to_string(),
                message: "TEXT cannot be combined with --interactive".to_string(),
            });
        }

        Ok(())
    }
}

/// Effective settings after layering command-line flags over the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub direction: Direction,
    pub log_level: Option<String>,
}

impl Settings {
    pub fn merge(file: TomlConfig, mode_override: Option<Direction>) -> Self {
        let direction = mode_override.unwrap_or_else(|| file.default_direction());
        let log_level = file.log_level().map(|l| l.trim().to_ascii_lowercase());

        Self {
            direction,
            log_level,
        }
    }
}

impl ConfigProvider for Settings {
    fn default_direction(&self) -> Direction {
        self.direction
    }

    fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_file_mode() {
        let file = TomlConfig::from_toml_str("[translation]\nmode = \"morse-to-text\"\n").unwrap();
        let settings = Settings::merge(file, Some(Direction::TextToMorse));
        assert_eq!(settings.default_direction(), Direction::TextToMorse);
    }

    #[test]
    fn test_file_mode_used_without_flag() {
        let file = TomlConfig::from_toml_str(
            "[translation]\nmode = \"morse-to-text\"\n[logging]\nlevel = \"INFO\"\n",
        )
        .unwrap();
        let settings = Settings::merge(file, None);
        assert_eq!(settings.default_direction(), Direction::MorseToText);
        assert_eq!(settings.log_level(), Some("info"));
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::merge(TomlConfig::default(), None);
        assert_eq!(settings, Settings::default());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing() {
        let config =
            CliConfig::try_parse_from(["morse-translator", "-m", "decode", "--", "...", "---"]).unwrap();
        assert_eq!(config.mode, Some(Direction::MorseToText));
        assert_eq!(config.text, vec!["...", "---"]);
        assert!(!config.interactive);

        let settings = config.resolve().unwrap();
        assert_eq!(settings.direction, Direction::MorseToText);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(CliConfig::try_parse_from(["morse-translator", "--mode", "sideways"]).is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_interactive_with_text_is_invalid() {
        let config = CliConfig::try_parse_from(["morse-translator", "-i", "sos"]).unwrap();
        assert!(matches!(
            config.resolve(),
            Err(MorseError::ConfigValidationError { .. })
        ));
    }
}
