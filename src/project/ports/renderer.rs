//! Rendering port used by list views.
//!
//! A renderer mounts one template instance per list into its host and
//! replaces that instance's content wholesale on every render.

use crate::project::domain::{Project, ProjectStatus};
use thiserror::Error;

/// Opaque token identifying a mounted list template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountHandle(usize);

impl MountHandle {
    /// Creates a handle from a renderer-specific slot index.
    #[must_use]
    pub const fn new(slot: usize) -> Self {
        Self(slot)
    }

    /// Returns the renderer-specific slot index.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0
    }
}

/// Describes the list template a view asks the renderer to mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDescriptor {
    /// Identifier of the list container element.
    pub element_id: String,
    /// Identifier of the inner list element that holds the items.
    pub list_id: String,
    /// Heading displayed above the items.
    pub heading: String,
}

impl ListDescriptor {
    /// Builds the descriptor for the list showing `status`.
    #[must_use]
    pub fn for_status(status: ProjectStatus) -> Self {
        let slug = status.slug();
        Self {
            element_id: format!("{slug}-projects"),
            list_id: format!("{slug}-projects-list"),
            heading: status.heading().to_owned(),
        }
    }
}

/// Errors returned by renderer implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The handle does not belong to this renderer.
    #[error("unknown mount handle {0:?}")]
    UnknownHandle(MountHandle),

    /// Template compilation or evaluation failed.
    #[error("template '{template}' failed: {reason}")]
    Template {
        /// Name of the failing template.
        template: String,
        /// Underlying failure description.
        reason: String,
    },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Produces a visual representation of a filtered project list.
pub trait ListRenderer: Send + Sync {
    /// Mounts a list template into the host.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when the template cannot be
    /// instantiated.
    fn mount(&self, list: &ListDescriptor) -> RenderResult<MountHandle>;

    /// Replaces the mounted list's items with `projects`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownHandle`] for a handle this renderer did
    /// not issue, or [`RenderError::Template`] when rendering fails.
    fn render(&self, handle: MountHandle, projects: &[Project]) -> RenderResult<()>;
}
