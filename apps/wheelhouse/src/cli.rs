//! Command line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// wheelhouse - package and publish wheels to managed volumes
#[derive(Parser)]
#[command(name = "wheelhouse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Package source trees and publish wheels to managed volumes")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging to the log directory
    #[arg(long, global = true)]
    pub debug: bool,

    /// Directory debug log files are written to
    #[arg(long, global = true, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build a wheel from a source tree and publish it to a managed volume
    #[command(alias = "pub")]
    Publish {
        /// Path to the source tree to package
        source: PathBuf,

        /// Managed volume directory to publish the wheel into
        destination: PathBuf,

        /// Replace an existing wheel of the same name
        #[arg(long)]
        overwrite: bool,

        /// Seconds before the build invocation is aborted (0 = no deadline)
        #[arg(long, value_name = "SECS")]
        build_timeout: Option<u64>,
    },
}
