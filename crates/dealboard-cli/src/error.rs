use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] dealboard_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'{0}' needs a listing id (try 'list' to see them)")]
    MissingListingId(&'static str),
    #[error("'sort' needs a key: votes, price, or recent")]
    MissingSortKey,
}
