//! Error types for project domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The people count is not a positive integer.
    #[error("invalid people count {0}, expected a positive integer")]
    InvalidPeopleCount(u32),
}

/// Error returned while parsing a project status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);

/// Error returned while parsing a project identifier from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid project identifier: '{0}'")]
pub struct ParseProjectIdError(pub String);
