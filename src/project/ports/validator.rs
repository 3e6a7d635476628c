//! Validator port for project form input.

use crate::project::{domain::NewProject, error::InputValidationError};

/// Raw project form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    /// Title field text.
    pub title: String,
    /// Description field text.
    pub description: String,
    /// People field text, parsed as a whole number during validation.
    pub people: String,
}

impl ProjectForm {
    /// Creates a form from raw field values.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, InputValidationError>;

/// Port for validating raw form input before it reaches the store.
///
/// Implementations should collect every failing rule rather than stop at
/// the first, combining them with [`InputValidationError::combine`].
pub trait ProjectInputValidator: Send + Sync {
    /// Validates the form and converts it into a project description.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError`] if any field fails validation.
    fn validate(&self, form: &ProjectForm) -> ValidationResult<NewProject>;
}

/// Configuration for form validation rules.
///
/// All bounds are exclusive: a description with `min_description_length`
/// of 5 needs at least six characters.
///
/// # Examples
///
/// ```
/// use project_board::project::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.min_description_length, Some(5));
///
/// let lenient = ValidationConfig::lenient();
/// assert_eq!(lenient.min_description_length, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Title must be longer than this many characters.
    pub min_title_length: Option<usize>,
    /// Title must be shorter than this many characters.
    pub max_title_length: Option<usize>,
    /// Description must be longer than this many characters.
    pub min_description_length: Option<usize>,
    /// Description must be shorter than this many characters.
    pub max_description_length: Option<usize>,
    /// People count must be greater than this value.
    pub min_people: i64,
    /// People count must be less than this value.
    pub max_people: Option<i64>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_title_length: None,
            max_title_length: None,
            min_description_length: Some(5),
            max_description_length: None,
            min_people: 0,
            max_people: None,
        }
    }
}

impl ValidationConfig {
    /// Creates a lenient configuration that only requires non-empty fields
    /// and a positive people count.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            min_description_length: None,
            ..Default::default()
        }
    }

    /// Creates a strict configuration with upper bounds on every field.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            min_title_length: Some(2),
            max_title_length: Some(80),
            min_description_length: Some(5),
            max_description_length: Some(500),
            min_people: 0,
            max_people: Some(100),
        }
    }
}
