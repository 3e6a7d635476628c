//! Validation service implementation.
//!
//! Provides the default implementation of the `ProjectInputValidator` port,
//! applying the field rules configured in [`ValidationConfig`].

use crate::project::{
    domain::{NewProject, PeopleCount},
    error::InputValidationError,
    ports::validator::{ProjectForm, ProjectInputValidator, ValidationConfig, ValidationResult},
    validation::rules::{self, Validatable},
};

const TITLE_FIELD: &str = "title";
const DESCRIPTION_FIELD: &str = "description";
const PEOPLE_FIELD: &str = "people";

/// Default implementation of the project form validator.
///
/// Every field is checked even after an earlier field fails, so the caller
/// receives the full list of problems at once.
///
/// # Examples
///
/// ```
/// use project_board::project::ports::validator::{ProjectForm, ProjectInputValidator};
/// use project_board::project::validation::service::DefaultProjectInputValidator;
///
/// let validator = DefaultProjectInputValidator::new();
/// let form = ProjectForm::new("Build API", "REST service", "3");
/// let project = validator.validate(&form).expect("valid form");
/// assert_eq!(project.people.value(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultProjectInputValidator {
    config: ValidationConfig,
}

impl DefaultProjectInputValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl ProjectInputValidator for DefaultProjectInputValidator {
    fn validate(&self, form: &ProjectForm) -> ValidationResult<NewProject> {
        let mut errors = Vec::new();

        let title = Validatable::text(TITLE_FIELD, &form.title)
            .required()
            .min_length(self.config.min_title_length)
            .max_length(self.config.max_title_length);
        if let Err(e) = rules::validate(&title) {
            errors.push(e);
        }

        let description = Validatable::text(DESCRIPTION_FIELD, &form.description)
            .required()
            .min_length(self.config.min_description_length)
            .max_length(self.config.max_description_length);
        if let Err(e) = rules::validate(&description) {
            errors.push(e);
        }

        let people = match parse_people(&form.people) {
            Ok(value) => {
                let people = Validatable::number(PEOPLE_FIELD, value)
                    .required()
                    .min(Some(self.config.min_people))
                    .max(self.config.max_people);
                match rules::validate(&people).and_then(|()| to_people_count(value)) {
                    Ok(count) => Some(count),
                    Err(e) => {
                        errors.push(e);
                        None
                    }
                }
            }
            Err(e) => {
                errors.push(e);
                None
            }
        };

        if let Some(error) = InputValidationError::combine(errors) {
            return Err(error);
        }
        let people = people.ok_or(InputValidationError::Required {
            field: PEOPLE_FIELD,
        })?;

        Ok(NewProject::new(
            form.title.clone(),
            people,
            form.description.clone(),
        ))
    }
}

fn parse_people(raw: &str) -> ValidationResult<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputValidationError::Required {
            field: PEOPLE_FIELD,
        });
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| InputValidationError::NotANumber {
            field: PEOPLE_FIELD,
            value: raw.to_owned(),
        })
}

/// Narrows a rule-checked value to a positive people count, whatever the
/// configured bounds allowed.
fn to_people_count(value: i64) -> ValidationResult<PeopleCount> {
    let narrowed = u32::try_from(value).map_err(|_| {
        if value < 0 {
            InputValidationError::BelowMinimum {
                field: PEOPLE_FIELD,
                min: 0,
                actual: value,
            }
        } else {
            InputValidationError::AboveMaximum {
                field: PEOPLE_FIELD,
                max: i64::from(u32::MAX) + 1,
                actual: value,
            }
        }
    })?;
    PeopleCount::new(narrowed).map_err(|_| InputValidationError::BelowMinimum {
        field: PEOPLE_FIELD,
        min: 0,
        actual: value,
    })
}
