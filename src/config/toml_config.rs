use crate::core::{Profile, RenderStyle};
use crate::utils::error::{QueryError, Result};
use crate::utils::validation::{validate_choices, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub submitter: SubmitterSection,
    pub messages: Option<MessageOverrides>,
    pub selectors: Option<SelectorsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitterSection {
    pub endpoint: String,
    pub profile: Option<Profile>,
    pub render: Option<RenderStyle>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageOverrides {
    pub empty_input: Option<String>,
    pub in_progress: Option<String>,
    pub failure: Option<String>,
    pub heading: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorsConfig {
    pub countries: Vec<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QueryError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QueryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LEGAL_API_URL})，找不到的變數原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;

        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QueryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn profile(&self) -> Profile {
        self.profile_or(Profile::default())
    }

    /// 檔案沒有寫 profile 時沿用 `fallback`
    pub fn profile_or(&self, fallback: Profile) -> Profile {
        self.submitter.profile.unwrap_or(fallback)
    }

    pub fn render_style(&self) -> RenderStyle {
        self.render_style_or(Profile::default())
    }

    /// 明確設定的 render 優先於 profile 的預設
    pub fn render_style_or(&self, fallback: Profile) -> RenderStyle {
        self.submitter
            .render
            .unwrap_or_else(|| self.profile_or(fallback).render_style())
    }

    pub fn countries(&self) -> Option<&[String]> {
        self.selectors.as_ref().map(|s| s.countries.as_slice())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("submitter.endpoint", &self.submitter.endpoint)?;

        if let Some(countries) = self.countries() {
            validate_choices("selectors.countries", countries)?;
        }

        Ok(())
    }
}
