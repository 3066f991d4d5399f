//! Command-line arguments for the quote tool.
//!
//! This module defines the CLI interface using `clap`. See `main` for
//! dispatch.
use clap::{Parser, Subcommand, ValueEnum};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "cq",
    about = "Cryptocurrency quotes on the command line",
    version
)]
pub struct Args {
    /// Print progress information while running.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the current price for an asset pair.
    ///
    /// `quote` is accepted as an alias for compatibility with earlier
    /// releases.
    #[command(alias = "quote")]
    Price {
        /// Base asset, e.g. BTC.
        base: String,

        /// Quote asset, e.g. USD.
        quote: String,

        /// Exchange from which to fetch prices.
        #[arg(short, long, default_value = "kraken")]
        exchange: String,
    },

    /// List supported exchanges or assets.
    List {
        /// What to list.
        #[arg(value_enum)]
        target: ListTarget,
    },
}

/// Object types `list` can enumerate.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListTarget {
    /// Supported exchanges with their homepages.
    Exchanges,
    /// Supported crypto and fiat assets.
    Assets,
}
