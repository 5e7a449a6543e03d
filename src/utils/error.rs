use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl HubError {
    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            HubError::IoError(e) => format!("File operation failed: {}", e),
            HubError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            HubError::SerializationError(_) => "Failed to serialize the card list".to_string(),
            HubError::ConfigError { message } => format!("Configuration problem: {}", message),
            HubError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            HubError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            HubError::ServerError { message } => format!("Could not start the server: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HubError::IoError(_) => "Check that the path exists and is writable",
            HubError::TomlError(_) => "Fix the syntax error reported above and try again",
            HubError::SerializationError(_) => "Report this as a bug",
            HubError::ConfigError { .. }
            | HubError::MissingConfigError { .. }
            | HubError::InvalidConfigValueError { .. } => {
                "Run `apps-hub check --config <file>` to validate the configuration"
            }
            HubError::ServerError { .. } => "Make sure the bind address is free and valid",
        }
    }
}

pub type Result<T> = std::result::Result<T, HubError>;
