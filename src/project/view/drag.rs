//! Drag-and-drop transport between project items and list views.
//!
//! A drag carries a single payload: the dragged project's identifier,
//! declared under [`PROJECT_ID_TYPE`].

use tracing::debug;

use crate::project::domain::Project;

/// Payload type tag under which project identifiers travel.
pub const PROJECT_ID_TYPE: &str = "text/plain";

/// Operations a drag source allows the drop target to perform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropEffect {
    /// No drop operation is allowed.
    #[default]
    None,
    /// The payload is copied to the target.
    Copy,
    /// The payload is moved to the target.
    Move,
}

/// Data carried by an in-flight drag.
///
/// Entries keep the order in which their types were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: DropEffect,
}

impl DataTransfer {
    /// Creates an empty transfer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `kind`, replacing any previous value of that type.
    pub fn set_data(&mut self, kind: impl Into<String>, data: impl Into<String>) {
        let kind = kind.into();
        let data = data.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == kind) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((kind, data)),
        }
    }

    /// Returns the data stored under `kind`.
    #[must_use]
    pub fn get_data(&self, kind: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == kind)
            .map(|(_, data)| data.as_str())
    }

    /// Iterates over the declared payload types in order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(kind, _)| kind.as_str())
    }

    /// Returns the first declared payload type.
    #[must_use]
    pub fn first_type(&self) -> Option<&str> {
        self.types().next()
    }

    /// Returns the allowed drop effect.
    #[must_use]
    pub const fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    /// Sets the allowed drop effect.
    pub const fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = effect;
    }
}

/// Something that can be picked up and dragged.
pub trait Draggable {
    /// Fills `transfer` when the drag begins.
    fn on_drag_start(&self, transfer: &mut DataTransfer);

    /// Called when the drag finishes, whether or not it was dropped.
    fn on_drag_end(&self, transfer: &DataTransfer);
}

/// Something that can receive a drop.
pub trait DragTarget {
    /// Decides whether the hovering drag is acceptable.
    ///
    /// Returns `true` and marks the target droppable when it is.
    fn on_drag_over(&self, transfer: &DataTransfer) -> bool;

    /// Handles a drop. Returns `true` when the drop changed anything.
    fn on_drop(&self, transfer: &DataTransfer) -> bool;

    /// Clears the droppable marker.
    fn on_drag_leave(&self);
}

/// Rendered representation of one project, usable as a drag source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    /// Wraps a project for display and dragging.
    #[must_use]
    pub const fn new(project: Project) -> Self {
        Self { project }
    }

    /// Returns the wrapped project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }
}

impl Draggable for ProjectItem {
    fn on_drag_start(&self, transfer: &mut DataTransfer) {
        transfer.set_data(PROJECT_ID_TYPE, self.project.id().to_string());
        transfer.set_effect_allowed(DropEffect::Move);
        debug!(project_id = %self.project.id(), "drag started");
    }

    fn on_drag_end(&self, _transfer: &DataTransfer) {
        debug!(project_id = %self.project.id(), "drag ended");
    }
}
