use crate::utils::error::{QueryError, EXIT_FAILED, EXIT_REJECTED};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_ENDPOINT: &str = "https://law-chatbot-fast.onrender.com/chat";
pub const DEFAULT_COUNTRY: &str = "india";

/// 使用者身分，對應頁面上的封閉選單
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Citizen,
    Lawyer,
    Accused,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Lawyer => "lawyer",
            Role::Accused => "accused",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 從輸入來源讀到、尚未驗證的三個欄位
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFields {
    pub issue: String,
    pub country: String,
    pub role: Role,
}

/// 送往伺服器的 JSON payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub user_input: String,
    pub country: String,
    pub user_role: Role,
}

/// 伺服器回傳的 JSON，不假設任何結構
pub type QueryResponse = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Pretty-printed JSON dump
    Raw,
    /// Heading followed by one `label: value` line per field
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    pub empty_input: String,
    pub in_progress: String,
    pub failure: String,
    pub heading: String,
}

impl Default for Messages {
    fn default() -> Self {
        Profile::Guidance.messages()
    }
}

/// Presets for the two page variants the submitter replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Guidance,
    Analysis,
}

impl Profile {
    pub fn render_style(&self) -> RenderStyle {
        match self {
            Profile::Guidance => RenderStyle::List,
            Profile::Analysis => RenderStyle::Raw,
        }
    }

    pub fn messages(&self) -> Messages {
        let failure = "❌ Unable to connect to the legal server.".to_string();
        match self {
            Profile::Guidance => Messages {
                empty_input: "❌ Please describe your legal issue.".to_string(),
                in_progress: "⏳ Connecting to legal server...".to_string(),
                failure,
                heading: "⚖️ Legal Guidance".to_string(),
            },
            Profile::Analysis => Messages {
                empty_input: "⚠️ Please describe your legal issue.".to_string(),
                in_progress: "⏳ Analyzing with Royal Legal Intelligence...".to_string(),
                failure,
                heading: "⚖️ Legal Analysis".to_string(),
            },
        }
    }
}

/// Result of one submission, as seen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Issue text was empty after trimming; no request was sent.
    EmptyInput,
    /// Input could not be read or the country is not a configured choice; no request was sent.
    Rejected,
    Rendered(QueryResponse),
    Failed,
}

impl Outcome {
    /// CLI 退出碼，與 `QueryError::exit_code` 使用同一組代碼
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Rendered(_) => 0,
            Outcome::EmptyInput => QueryError::EmptyInput.exit_code(),
            Outcome::Rejected => EXIT_REJECTED,
            Outcome::Failed => EXIT_FAILED,
        }
    }
}
