//! Dealboard CLI - Terminal interface for the property deals board
//!
//! One-shot subcommands render the seeded board; the default mode opens an
//! interactive shell whose session lives exactly as long as the process.

mod cli;
mod commands;
mod error;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::board::run_board;
use crate::commands::completions::run_completions;
use crate::commands::list::run_list;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dealboard=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { sort, json }) => run_list(sort.into(), json)?,
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        Some(Commands::Board) | None => run_board()?,
    }

    Ok(())
}
