pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{CliInput, MemoryDisplay, StaticInput, TerminalDisplay};
pub use config::{SubmitterSettings, TomlConfig};
pub use core::{submitter::QuerySubmitter, transport::HttpTransport, Outcome};
pub use utils::error::{QueryError, Result};
