use thiserror::Error;

/// Server unreachable or answered with something other than JSON.
pub const EXIT_FAILED: i32 = 1;
/// Input rejected before any request was sent.
pub const EXIT_REJECTED: i32 = 2;
pub const EXIT_CONFIG: i32 = 3;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Issue description is empty")]
    EmptyInput,

    #[error("Unknown {field} selection: '{value}'")]
    UnknownSelection { field: String, value: String },
}

impl QueryError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            QueryError::Transport(_) | QueryError::Decode(_) => {
                "Unable to reach the legal server".to_string()
            }
            QueryError::Io(e) => format!("Could not read input: {}", e),
            QueryError::ConfigError { message } => format!("Invalid configuration: {}", message),
            QueryError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid configuration for '{}': {}", field, reason)
            }
            QueryError::EmptyInput => "Please describe your legal issue".to_string(),
            QueryError::UnknownSelection { field, value } => {
                format!("'{}' is not an available {}", value, field)
            }
        }
    }

    /// 依錯誤種類決定 CLI 退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            QueryError::Transport(_) | QueryError::Decode(_) => EXIT_FAILED,
            QueryError::EmptyInput | QueryError::UnknownSelection { .. } => EXIT_REJECTED,
            QueryError::Io(_)
            | QueryError::ConfigError { .. }
            | QueryError::InvalidConfigValue { .. } => EXIT_CONFIG,
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
