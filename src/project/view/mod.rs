//! View binding for the board: status-filtered lists and drag/drop.

pub mod drag;
mod list;

pub use drag::{DataTransfer, DragTarget, Draggable, DropEffect, PROJECT_ID_TYPE, ProjectItem};
pub use list::ProjectListView;
