//! Application services for the project board.

mod input;
mod store;

pub use input::ProjectInputService;
pub use store::ProjectStore;
