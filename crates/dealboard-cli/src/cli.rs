use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dealboard_core::SortKey;

#[derive(Parser)]
#[command(name = "dealboard")]
#[command(about = "Browse, rate, and share property deals from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the seeded deal board once and exit
    List {
        /// Ordering for the board
        #[arg(long, value_enum, default_value_t = SortArg::Votes)]
        sort: SortArg,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open the interactive board shell (the default)
    Board,
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortArg {
    Votes,
    Price,
    Recent,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Votes => Self::Votes,
            SortArg::Price => Self::Price,
            SortArg::Recent => Self::Recent,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
