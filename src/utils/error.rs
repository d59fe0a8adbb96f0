use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MorseError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            MorseError::IoError(e) => format!("Could not read or write data: {}", e),
            MorseError::ConfigError { message } => {
                format!("The configuration file could not be loaded: {}", message)
            }
            MorseError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            MorseError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not an accepted value for '{}'", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MorseError::IoError(_) => {
                "Check that the input is readable and valid UTF-8".to_string()
            }
            MorseError::ConfigError { .. } => {
                "Make sure the file exists and is valid TOML format".to_string()
            }
            MorseError::ConfigValidationError { .. } => {
                "Fix the reported field in the configuration file".to_string()
            }
            MorseError::InvalidConfigValueError { reason, .. } => reason.clone(),
        }
    }

    /// 程式結束代碼：設定錯誤 1，IO 錯誤 2
    pub fn exit_code(&self) -> i32 {
        match self {
            MorseError::IoError(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MorseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let io = MorseError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(io.exit_code(), 2);

        let config = MorseError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
    }

    #[test]
    fn test_invalid_value_suggestion_is_reason() {
        let e = MorseError::InvalidConfigValueError {
            field: "logging.level".to_string(),
            value: "loud".to_string(),
            reason: "Value must be one of: trace, debug".to_string(),
        };
        assert_eq!(e.recovery_suggestion(), "Value must be one of: trace, debug");
        assert!(e.user_friendly_message().contains("loud"));
        assert!(e.to_string().contains("logging.level"));
    }
}
