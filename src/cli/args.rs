use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "isocal", version, author, about = "Contribution calendar statistics and isometric block layout")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show totals, best day, average and streaks
    Stats {
        /// Calendar snapshot (JSON), or - for stdin
        input: PathBuf,
        /// Print the raw summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute the isometric block layout for a renderer
    Layout {
        /// Calendar snapshot (JSON), or - for stdin
        input: PathBuf,
        /// Scene file to write (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Embed the statistics summary for an overlay
        #[arg(long)]
        with_stats: bool,
    },
    /// Export a plain-text summary with per-week totals to stdout
    Export {
        /// Calendar snapshot (JSON), or - for stdin
        input: PathBuf,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
