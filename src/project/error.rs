//! Error types for project form input validation.

use thiserror::Error;

/// Reasons a submitted project form is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputValidationError {
    /// A required field is empty after trimming.
    #[error("{field} is required")]
    Required {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Text is not longer than the configured minimum.
    #[error("{field} must be longer than {min} characters, got {actual}")]
    TooShort {
        /// Name of the offending field.
        field: &'static str,
        /// Exclusive lower bound on the character count.
        min: usize,
        /// Observed character count.
        actual: usize,
    },

    /// Text is not shorter than the configured maximum.
    #[error("{field} must be shorter than {max} characters, got {actual}")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Exclusive upper bound on the character count.
        max: usize,
        /// Observed character count.
        actual: usize,
    },

    /// Number is not greater than the configured minimum.
    #[error("{field} must be greater than {min}, got {actual}")]
    BelowMinimum {
        /// Name of the offending field.
        field: &'static str,
        /// Exclusive lower bound.
        min: i64,
        /// Observed value.
        actual: i64,
    },

    /// Number is not less than the configured maximum.
    #[error("{field} must be less than {max}, got {actual}")]
    AboveMaximum {
        /// Name of the offending field.
        field: &'static str,
        /// Exclusive upper bound.
        max: i64,
        /// Observed value.
        actual: i64,
    },

    /// A numeric field does not hold an integer.
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber {
        /// Name of the offending field.
        field: &'static str,
        /// Raw field text.
        value: String,
    },

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[InputValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl InputValidationError {
    /// Combines collected errors, unwrapping a single error and flattening
    /// nested `Multiple` values.
    ///
    /// Returns `None` when `errors` is empty.
    #[must_use]
    pub fn combine(errors: Vec<Self>) -> Option<Self> {
        let mut flattened = Vec::with_capacity(errors.len());
        for error in errors {
            match error {
                Self::Multiple(nested) => flattened.extend(nested),
                single => flattened.push(single),
            }
        }
        match flattened.len() {
            0 => None,
            1 => flattened.pop(),
            _ => Some(Self::Multiple(flattened)),
        }
    }

    /// Returns `true` if this error represents multiple validation failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors, treating a single error as a
    /// one-element list.
    #[must_use]
    pub fn errors(&self) -> &[Self] {
        match self {
            Self::Multiple(errors) => errors,
            single => std::slice::from_ref(single),
        }
    }

    /// Returns the name of the offending field, if the error has one.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. }
            | Self::NotANumber { field, .. } => Some(field),
            Self::Multiple(_) => None,
        }
    }
}
