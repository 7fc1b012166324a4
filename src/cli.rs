use std::path::PathBuf;

use clap::Parser;

/// Browse the project catalog from the terminal.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "interfly", version, about)]
pub struct Cli {
    /// Path to a TOML config file (default: <config_dir>/interfly/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Listings service base URL, overriding config and INTERFLY_ENDPOINT
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Case-insensitive text matched against titles and descriptions
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Category id to restrict to (see --categories)
    #[arg(short, long, value_name = "ID")]
    pub category: Option<String>,

    /// Show the detail view of one listing
    #[arg(long, value_name = "ID")]
    pub details: Option<String>,

    /// List the available categories and exit
    #[arg(long)]
    pub categories: bool,

    /// Print the result as JSON instead of cards
    #[arg(long)]
    pub json: bool,

    /// Also write logs to the platform log directory
    #[arg(long)]
    pub log_file: bool,
}
