//! CLI argument definitions using clap
//!
//! Commands:
//! - heroes serve [--config <path>] [--host <host>] [--port <port>] [--database <path>]
//! - heroes init [--config <path>] [--database <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// heroes - a small record service for heroes
#[derive(Parser, Debug)]
#[command(name = "heroes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Settings shared by every command; flags override the config file
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to JSON configuration file (optional)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// SQLite database file
    #[arg(long)]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and tables, then exit
    Init {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Start the HTTP server
    Serve {
        #[command(flatten)]
        config: ConfigArgs,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
