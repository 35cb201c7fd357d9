use anyhow::Context;
use clap::Parser;
use signup_form::utils::{logger, validation::Validate};
use signup_form::ServerConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting signup-form server");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    signup_form::server::run(&config.host, config.port)
        .await
        .with_context(|| format!("HTTP server error on {}:{}", config.host, config.port))?;

    Ok(())
}
