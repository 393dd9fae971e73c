//! Error types for user domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain user values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The display name is empty after trimming.
    #[error("user name must not be empty")]
    EmptyName,

    /// The contact address is not a plausible email address.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Error returned while parsing profile slugs from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown profile slug: {0}")]
pub struct ParseProfileError(pub String);
