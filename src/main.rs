use clap::Parser;
use legal_query::utils::{logger, validation::Validate};
use legal_query::{CliConfig, CliInput, QuerySubmitter, TerminalDisplay};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting legal-query CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 組合並驗證設定
    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let input = CliInput::new(config.issue.clone(), config.country.clone(), config.role);
    let submitter = QuerySubmitter::new(input, TerminalDisplay::new(), settings);

    let exit_code = submitter.submit().await.exit_code();

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
