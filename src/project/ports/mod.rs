//! Port definitions for the project board.

mod observer;
pub mod renderer;
pub mod validator;

pub use observer::ProjectObserver;
pub use renderer::{ListDescriptor, ListRenderer, MountHandle, RenderError, RenderResult};
pub use validator::{ProjectForm, ProjectInputValidator, ValidationConfig, ValidationResult};
