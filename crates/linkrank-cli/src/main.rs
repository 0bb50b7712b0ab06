//! Linkrank CLI
//!
//! Rank the pages of an HTML corpus by sampling and by iterating PageRank.

use anyhow::Result;
use clap::Parser;
use linkrank_core::error::exit_codes;
use linkrank_core::LinkRankError;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Rank(args) => commands::rank::run(args, cli.format),
        Commands::Links(args) => commands::links::run(args, cli.format),
        Commands::Config(args) => commands::config::run(args, cli.format),
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<LinkRankError>()
        .map(LinkRankError::exit_code)
        .unwrap_or(exit_codes::GENERAL_ERROR)
}
