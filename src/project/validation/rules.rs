//! Individual validation rule implementations.
//!
//! A [`Validatable`] describes one form field and the constraints that apply
//! to it. Each rule is a pure function returning `Ok(())` or a specific
//! [`InputValidationError`]. Length rules only apply to text values and
//! numeric rules only to numbers.

use crate::project::error::InputValidationError;

/// Value of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free text.
    Text(&'a str),
    /// Parsed integer.
    Number(i64),
}

/// A form field together with the constraints to check it against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validatable<'a> {
    field: &'static str,
    value: FieldValue<'a>,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<i64>,
    max: Option<i64>,
}

impl<'a> Validatable<'a> {
    /// Describes a text field with no constraints.
    #[must_use]
    pub const fn text(field: &'static str, value: &'a str) -> Self {
        Self::unconstrained(field, FieldValue::Text(value))
    }

    /// Describes a numeric field with no constraints.
    #[must_use]
    pub const fn number(field: &'static str, value: i64) -> Self {
        Self::unconstrained(field, FieldValue::Number(value))
    }

    const fn unconstrained(field: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            field,
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Requires the value to be non-blank.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires text to be longer than `length` characters.
    #[must_use]
    pub const fn min_length(mut self, length: Option<usize>) -> Self {
        self.min_length = length;
        self
    }

    /// Requires text to be shorter than `length` characters.
    #[must_use]
    pub const fn max_length(mut self, length: Option<usize>) -> Self {
        self.max_length = length;
        self
    }

    /// Requires a number greater than `bound`.
    #[must_use]
    pub const fn min(mut self, bound: Option<i64>) -> Self {
        self.min = bound;
        self
    }

    /// Requires a number less than `bound`.
    #[must_use]
    pub const fn max(mut self, bound: Option<i64>) -> Self {
        self.max = bound;
        self
    }

    /// Returns the field name.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }
}

/// Validates one field against all of its constraints.
///
/// # Errors
///
/// Returns every failing rule, combined with
/// [`InputValidationError::combine`].
pub fn validate(input: &Validatable<'_>) -> Result<(), InputValidationError> {
    let checks = [
        validate_required(input),
        validate_min_length(input),
        validate_max_length(input),
        validate_min(input),
        validate_max(input),
    ];
    let errors: Vec<_> = checks.into_iter().filter_map(Result::err).collect();
    InputValidationError::combine(errors).map_or(Ok(()), Err)
}

/// Validates that a required text value is non-blank.
///
/// Numbers always satisfy this rule.
///
/// # Errors
///
/// Returns [`InputValidationError::Required`] for blank text.
pub fn validate_required(input: &Validatable<'_>) -> Result<(), InputValidationError> {
    match input.value {
        FieldValue::Text(text) if input.required && text.trim().is_empty() => {
            Err(InputValidationError::Required { field: input.field })
        }
        _ => Ok(()),
    }
}

/// Validates that text is longer than the configured minimum.
///
/// # Errors
///
/// Returns [`InputValidationError::TooShort`] when the character count is
/// less than or equal to the bound.
pub fn validate_min_length(input: &Validatable<'_>) -> Result<(), InputValidationError> {
    let (FieldValue::Text(text), Some(min)) = (input.value, input.min_length) else {
        return Ok(());
    };
    let actual = text.chars().count();
    if actual <= min {
        return Err(InputValidationError::TooShort {
            field: input.field,
            min,
            actual,
        });
    }
    Ok(())
}

/// Validates that text is shorter than the configured maximum.
///
/// # Errors
///
/// Returns [`InputValidationError::TooLong`] when the character count is
/// greater than or equal to the bound.
pub fn validate_max_length(input: &Validatable<'_>) -> Result<(), InputValidationError> {
    let (FieldValue::Text(text), Some(max)) = (input.value, input.max_length) else {
        return Ok(());
    };
    let actual = text.chars().count();
    if actual >= max {
        return Err(InputValidationError::TooLong {
            field: input.field,
            max,
            actual,
        });
    }
    Ok(())
}

/// Validates that a number is greater than the configured minimum.
///
/// # Errors
///
/// Returns [`InputValidationError::BelowMinimum`] when the value is less
/// than or equal to the bound.
pub fn validate_min(input: &Validatable<'_>) -> Result<(), InputValidationError> {
    let (FieldValue::Number(actual), Some(min)) = (input.value, input.min) else {
        return Ok(());
    };
    if actual <= min {
        return Err(InputValidationError::BelowMinimum {
            field: input.field,
            min,
            actual,
        });
    }
    Ok(())
}

/// Validates that a number is less than the configured maximum.
///
/// # Errors
///
/// Returns [`InputValidationError::AboveMaximum`] when the value is greater
/// than or equal to the bound.
pub fn validate_max(input: &Validatable<'_>) -> Result<(), InputValidationError> {
    let (FieldValue::Number(actual), Some(max)) = (input.value, input.max) else {
        return Ok(());
    };
    if actual >= max {
        return Err(InputValidationError::AboveMaximum {
            field: input.field,
            max,
            actual,
        });
    }
    Ok(())
}
