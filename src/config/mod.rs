pub mod settings;
pub mod toml_config;

pub use settings::SubmitterSettings;
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::{Profile, RenderStyle, Role};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "legal-query")]
#[command(about = "Send a legal issue to the legal guidance server and show its answer")]
pub struct CliConfig {
    /// Free-text description of the legal issue (read from stdin when omitted)
    #[arg(long)]
    pub issue: Option<String>,

    #[arg(long, default_value = crate::domain::model::DEFAULT_COUNTRY)]
    pub country: String,

    #[arg(long, value_enum, default_value_t = Role::Citizen)]
    pub role: Role,

    #[arg(long, default_value = crate::domain::model::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, value_enum, default_value_t = Profile::Guidance)]
    pub profile: Profile,

    /// Overrides the profile's render style
    #[arg(long, value_enum)]
    pub render: Option<RenderStyle>,

    /// TOML file with submitter settings; its endpoint replaces --endpoint, and its
    /// profile and render, when present, replace --profile (--render still wins)
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 組合 CLI 參數與（可選的）TOML 檔案
    pub fn settings(&self) -> Result<SubmitterSettings> {
        let settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading submitter settings from {}", path);
                let toml_config = TomlConfig::from_file(path)?;
                crate::utils::validation::Validate::validate(&toml_config)?;
                SubmitterSettings::from_toml(&toml_config, self.profile)
            }
            None => SubmitterSettings::from_profile(self.profile, self.endpoint.clone()),
        };

        Ok(match self.render {
            Some(style) => settings.with_render_style(style),
            None => settings,
        })
    }
}
