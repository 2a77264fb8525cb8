//! Error types shared by the expense and income views.
//!
//! Nothing here is fatal: validation errors become a user-visible alert,
//! remote and storage errors are logged and either recovered through the
//! local cache (expenses) or left to the caller (incomes).

use thiserror::Error;

use crate::forms::FormField;

/// A form submission that must not reach the network
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please fill all fields")]
    MissingField(FormField),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Failure talking to the remote collection resource
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Failure reading or writing the persisted expense snapshot
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Local storage unavailable: {0}")]
    Unavailable(String),
    #[error("Corrupt cache entry: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("Failed to write cache: {0}")]
    Write(String),
}

/// Outcome of an income operation that did not complete
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
