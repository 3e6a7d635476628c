//! Observer port for store change notifications.

use crate::project::domain::ProjectSnapshot;

/// Capability to accept a snapshot of the project collection.
///
/// The store calls every registered observer after each mutation, in
/// subscription order, on the mutating thread. Each call receives its own
/// owned snapshot.
pub trait ProjectObserver: Send + Sync {
    /// Receives the project collection as it stands after a mutation.
    fn on_projects_changed(&self, snapshot: ProjectSnapshot);
}

impl<F> ProjectObserver for F
where
    F: Fn(ProjectSnapshot) + Send + Sync,
{
    fn on_projects_changed(&self, snapshot: ProjectSnapshot) {
        self(snapshot);
    }
}
