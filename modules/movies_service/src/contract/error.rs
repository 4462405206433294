//! Contract error types for the movies service

use thiserror::Error;

/// Movies service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoviesError {
    /// Malformed input (identifier, page number)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Requested resource does not exist
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// Page number outside `1..=total_pages`
    #[error("Invalid page {page}: expected a page between 1 and {total_pages}")]
    InvalidPage { page: String, total_pages: u64 },

    /// Route exists but does not accept the method
    #[error("Method {method} is not allowed")]
    MethodNotAllowed { method: String },

    /// Storage or connectivity failure, details are logged not exposed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MoviesError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn film_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            resource: "film_work".to_string(),
            id: id.to_string(),
        }
    }
}
