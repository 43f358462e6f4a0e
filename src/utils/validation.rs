use crate::utils::error::{QueryError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(QueryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(QueryError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(QueryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QueryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 選單必須至少有一個選項，且每個選項都不可為空白
pub fn validate_choices(field_name: &str, choices: &[String]) -> Result<()> {
    if choices.is_empty() {
        return Err(QueryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one choice is required".to_string(),
        });
    }

    for choice in choices {
        validate_non_empty_string(field_name, choice)?;
    }

    Ok(())
}

/// 確認使用者的選擇在封閉選單內
pub fn validate_selection(field_name: &str, value: &str, choices: &[String]) -> Result<()> {
    if choices.iter().any(|choice| choice == value) {
        Ok(())
    } else {
        Err(QueryError::UnknownSelection {
            field: field_name.to_string(),
            value: value.to_string(),
        })
    }
}
