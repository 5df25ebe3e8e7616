//! Error types for dealboard-core

use thiserror::Error;

/// Result type alias using dealboard-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dealboard-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A listing submission is missing required fields, or a required field
    /// failed to parse. The offending field names are listed in form order.
    #[error("Missing or invalid required fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Listing not found
    #[error("Listing not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_all_fields() {
        let error = Error::Validation(vec!["title".to_string(), "price".to_string()]);
        assert_eq!(
            error.to_string(),
            "Missing or invalid required fields: title, price"
        );
    }
}
