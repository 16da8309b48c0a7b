//! SmartAdventures command line client
//!
//! Main application entry point

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info};

use SmartAdventures::{
    cli::{self, Cli},
    config::Settings,
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Cli::parse();

    // Load configuration
    let settings = match &args.config {
        Some(path) => Settings::from_file(path),
        None => Settings::new(),
    }
    .context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let log_guard = logging::init_logging(&settings.logging)?;
    info!("Starting {}", SmartAdventures::info());
    debug!(base_url = %settings.api.base_url, "Using backend");

    let locale = cli::display_locale(&args, &settings);
    let services = ServiceFactory::new(&settings).await?;

    if let Err(e) = cli::run(args.command, &services, locale).await {
        error!(error = %e, severity = %e.severity(), "Command failed");
        eprintln!("{}", e.user_message());
        // exit skips destructors
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}
