//! Cryptocurrency quotes on the command line.
//!
//! `cq` resolves the requested assets against the built-in registry, asks the
//! selected exchange for a fresh quote over its public HTTP API and prints a
//! fixed-layout block to stdout:
//!
//! ```bash
//! cq price BTC USD
//! cq quote ETH EUR --exchange kraken
//! cq list exchanges
//! cq list assets
//! ```
//!
//! Each invocation performs at most one blocking network call and then
//! terminates. Library errors are reported as a single line on stderr with a
//! non-zero exit status; nothing is printed to stdout on failure.
#![warn(missing_docs)]
mod args;

use std::process::ExitCode;

use clap::Parser;
use cryptoquote::Result;
use cryptoquote::asset::AssetPair;
use cryptoquote::exchange::ExchangeRegistry;
use cryptoquote::format;
use log::debug;

use crate::args::{Args, Command, ListTarget};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Executes one subcommand and returns the text to print.
///
/// Output is built fully before anything reaches stdout, so a failing
/// invocation never leaves partial output behind.
fn run(command: &Command) -> Result<String> {
    match command {
        Command::Price {
            base,
            quote,
            exchange,
        } => {
            let registry = ExchangeRegistry::builtin()?;
            let exchange = registry.resolve(exchange)?;
            let pair = AssetPair::resolve(base, quote)?;

            debug!("fetching {} from {}", pair, exchange.name());
            let quote = exchange.fetch_quote(&pair)?;

            Ok(format::format_quote(&quote, &pair, exchange.name()))
        }
        Command::List { target } => match target {
            ListTarget::Exchanges => {
                Ok(format::render_exchanges(&ExchangeRegistry::builtin()?))
            }
            ListTarget::Assets => Ok(format::render_assets()),
        },
    }
}

/// Default filter shows warnings only; `--verbose` raises it to debug.
/// `RUST_LOG` still takes precedence via `parse_default_env`.
fn init_logger(verbose: bool) {
    let filter = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();
}
