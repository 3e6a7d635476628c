//! Form-boundary service that turns raw input into new projects.

use std::sync::Arc;
use tracing::{info, warn};

use crate::project::{
    domain::ProjectId,
    error::InputValidationError,
    ports::validator::{ProjectForm, ProjectInputValidator},
    services::ProjectStore,
};

/// Validates submitted forms and adds the resulting projects to the store.
#[derive(Clone)]
pub struct ProjectInputService<V>
where
    V: ProjectInputValidator,
{
    store: Arc<ProjectStore>,
    validator: V,
}

impl<V> ProjectInputService<V>
where
    V: ProjectInputValidator,
{
    /// Creates a service writing into `store`.
    #[must_use]
    pub const fn new(store: Arc<ProjectStore>, validator: V) -> Self {
        Self { store, validator }
    }

    /// Returns the validator used for submissions.
    #[must_use]
    pub const fn validator(&self) -> &V {
        &self.validator
    }

    /// Validates `form` and adds the project it describes.
    ///
    /// The form is consumed, leaving the caller with a cleared form.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError`] when any field is invalid; the store
    /// is not touched in that case.
    pub fn submit(&self, form: ProjectForm) -> Result<ProjectId, InputValidationError> {
        let new_project = self.validator.validate(&form).inspect_err(|error| {
            warn!(%error, "project form rejected");
        })?;
        let id = self.store.add(new_project);
        info!(project_id = %id, "project created from form");
        Ok(id)
    }
}
