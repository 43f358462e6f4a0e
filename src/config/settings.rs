use crate::config::toml_config::TomlConfig;
use crate::core::{Messages, Profile, RenderStyle, SubmitterConfig};
use crate::domain::model::{DEFAULT_COUNTRY, DEFAULT_ENDPOINT};
use crate::utils::error::Result;
use crate::utils::validation::{validate_choices, validate_url, Validate};

/// 解析完成、供 submitter 使用的設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterSettings {
    pub endpoint: String,
    pub render_style: RenderStyle,
    pub messages: Messages,
    pub countries: Vec<String>,
}

impl Default for SubmitterSettings {
    fn default() -> Self {
        Self::from_profile(Profile::default(), DEFAULT_ENDPOINT)
    }
}

impl SubmitterSettings {
    pub fn from_profile(profile: Profile, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            render_style: profile.render_style(),
            messages: profile.messages(),
            countries: vec![DEFAULT_COUNTRY.to_string()],
        }
    }

    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    pub fn with_countries(mut self, countries: Vec<String>) -> Self {
        self.countries = countries;
        self
    }

    /// TOML 檔案的值覆蓋目前設定；檔案沒寫 profile 時使用 `fallback`
    pub fn from_toml(config: &TomlConfig, fallback: Profile) -> Self {
        let profile = config.profile_or(fallback);
        let mut settings = Self::from_profile(profile, config.submitter.endpoint.clone())
            .with_render_style(config.render_style_or(fallback));

        if let Some(countries) = config.countries() {
            settings.countries = countries.to_vec();
        }

        if let Some(overrides) = &config.messages {
            let messages = &mut settings.messages;
            if let Some(text) = &overrides.empty_input {
                messages.empty_input = text.clone();
            }
            if let Some(text) = &overrides.in_progress {
                messages.in_progress = text.clone();
            }
            if let Some(text) = &overrides.failure {
                messages.failure = text.clone();
            }
            if let Some(text) = &overrides.heading {
                messages.heading = text.clone();
            }
        }

        settings
    }
}

impl SubmitterConfig for SubmitterSettings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }

    fn countries(&self) -> &[String] {
        &self.countries
    }
}

impl Validate for SubmitterSettings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_choices("countries", &self.countries)?;
        Ok(())
    }
}
