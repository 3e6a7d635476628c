//! Domain model for the project board.
//!
//! Projects carry an identity, descriptive fields and an open/closed status.
//! Snapshots are the read-only view of the collection handed to observers.

mod error;
mod ids;
mod project;
mod snapshot;

pub use error::{ParseProjectIdError, ParseProjectStatusError, ProjectDomainError};
pub use ids::{PeopleCount, ProjectId};
pub use project::{NewProject, Project, ProjectStatus};
pub use snapshot::ProjectSnapshot;
