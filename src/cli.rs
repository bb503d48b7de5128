//! Command-line argument parsing for the movie console.

use clap::Parser;
use std::path::PathBuf;

/// An interactive console for a movie, people and cast database.
#[derive(Parser, Debug)]
#[command(name = "movies")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file (created if missing)
    #[arg(short = 'd', long, value_name = "PATH", env = "MOVIES_DATABASE")]
    pub database: Option<PathBuf>,

    /// Config file path
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }
}
