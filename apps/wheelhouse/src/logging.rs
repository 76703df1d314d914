//! Tracing subscriber setup for the CLI

use std::path::Path;

/// Initialize tracing with JSON awareness
///
/// Debug mode writes structured records to a timestamped file under the log
/// directory; JSON mode without debug suppresses console logging entirely so
/// stdout stays machine-readable. `RUST_LOG` always wins over the configured
/// level.
pub fn init_tracing(json_mode: bool, debug_enabled_flag: bool, log_dir: &Path, level: &str) {
    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;

    if debug_enabled {
        if std::fs::create_dir_all(log_dir).is_ok() {
            let log_file = log_dir.join(format!(
                "wheelhouse-{}.log",
                chrono::Utc::now().format("%Y%m%d-%H%M%S")
            ));

            if let Ok(file) = std::fs::File::create(&log_file) {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(file)
                    .with_env_filter(
                        tracing_subscriber::EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| {
                                tracing_subscriber::EnvFilter::new("info,wheelhouse=debug")
                            }),
                    )
                    .init();
                if !json_mode {
                    eprintln!("Debug logs: {}", log_file.display());
                }
                return;
            }
        }
    }

    if json_mode {
        // Suppress all console output to avoid contaminating JSON
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string())),
            )
            .init();
    }
}
