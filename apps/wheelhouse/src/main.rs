//! wheelhouse - helper CLI for managed notebook/data-platform environments
//!
//! Packages a source tree into a wheel and publishes it to a managed volume
//! through the publish pipeline crate.

mod cli;
mod logging;

use crate::cli::{Cli, Commands};
use clap::Parser;
use std::process;
use std::sync::Arc;
use tracing::{error, info};
use wheelhouse_bridge::LocalBridge;
use wheelhouse_config::Config;
use wheelhouse_errors::{Error, UserFacingError};
use wheelhouse_publish::PublishPipeline;
use wheelhouse_types::PublishRequest;

#[tokio::main]
async fn main() {
    // Parse command line arguments first to check for JSON mode
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    // Run the application and handle errors
    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        if !json_mode {
            eprintln!("Error: {}", e.user_message());
            if let Some(hint) = e.user_hint() {
                eprintln!("Hint: {hint}");
            }
        }
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), Error> {
    // Load configuration with proper precedence:
    // 1. Start with file config (or defaults)
    let mut config = Config::load_or_default(&cli.global.config).await?;

    // 2. Merge environment variables
    config.merge_env()?;

    let log_dir = cli
        .global
        .log_dir
        .clone()
        .unwrap_or_else(|| config.log_dir());
    logging::init_tracing(
        cli.global.json,
        cli.global.debug,
        &log_dir,
        &config.logging.level,
    );

    info!("Starting wheelhouse v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Publish {
            source,
            destination,
            overwrite,
            build_timeout,
        } => {
            // 3. Apply CLI flags (highest precedence)
            if let Some(secs) = build_timeout {
                config.publish.build_timeout_secs = secs;
            }

            let bridge = Arc::new(LocalBridge::new());
            let pipeline = PublishPipeline::from_config(&config, bridge);
            let request = PublishRequest::new(source, destination).with_overwrite(overwrite);

            let report = pipeline.run(&request).await?;

            if cli.global.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Published {} to {}",
                    report.artifact,
                    report.destination_path.display()
                );
                if report.overwrote {
                    println!("Replaced an existing wheel of the same name.");
                }
            }
        }
    }

    Ok(())
}
