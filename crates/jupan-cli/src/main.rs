// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Jupan CLI tool

mod repl;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jupan")]
#[command(about = "Interactive decimal calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive calculator (the default)
    Repl {
        /// Where to keep the calculation history
        #[arg(long)]
        history_file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never mix with calculator output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let history_file = match cli.command {
        Some(Commands::Repl { history_file }) => history_file,
        None => None,
    };

    let mut config = jupan::CalculatorConfig::from_env();
    if let Some(path) = history_file {
        config = config.with_history_path(path);
    }

    let mut repl = repl::Repl::new(config)?;
    repl.run()?;

    Ok(())
}
