//! List view showing one status partition of the board.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

use crate::project::{
    domain::{Project, ProjectId, ProjectSnapshot, ProjectStatus},
    ports::{ListDescriptor, ListRenderer, MountHandle, RenderResult},
    services::ProjectStore,
    view::drag::{DataTransfer, DragTarget, PROJECT_ID_TYPE, ProjectItem},
};

/// A list of the projects sharing one status.
///
/// The view holds no authoritative state: its project list is a filtered
/// copy of the last snapshot the store delivered. Dropping a project onto
/// the view moves it into the view's status.
pub struct ProjectListView {
    state: Arc<ListViewState>,
    store: Arc<ProjectStore>,
}

struct ListViewState {
    status: ProjectStatus,
    handle: MountHandle,
    renderer: Arc<dyn ListRenderer>,
    assigned: RwLock<Vec<Project>>,
    droppable: AtomicBool,
}

impl ListViewState {
    fn apply(&self, snapshot: &ProjectSnapshot) {
        let relevant = snapshot.with_status(self.status);
        let mut assigned = self
            .assigned
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *assigned = relevant;
        if let Err(error) = self.renderer.render(self.handle, &assigned) {
            warn!(status = %self.status, %error, "project list render failed");
        }
    }
}

impl ProjectListView {
    /// Mounts the list for `status` and subscribes it to `store`.
    ///
    /// The list starts empty and fills on the store's next mutation.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error when the list template cannot be
    /// mounted.
    pub fn mount(
        store: Arc<ProjectStore>,
        status: ProjectStatus,
        renderer: Arc<dyn ListRenderer>,
    ) -> RenderResult<Self> {
        let handle = renderer.mount(&ListDescriptor::for_status(status))?;
        let state = Arc::new(ListViewState {
            status,
            handle,
            renderer,
            assigned: RwLock::new(Vec::new()),
            droppable: AtomicBool::new(false),
        });

        let listener = Arc::downgrade(&state);
        store.subscribe(move |snapshot: ProjectSnapshot| {
            if let Some(state) = listener.upgrade() {
                state.apply(&snapshot);
            }
        });
        debug!(%status, "project list mounted");

        Ok(Self { state, store })
    }

    /// Returns the status this list shows.
    #[must_use]
    pub fn status(&self) -> ProjectStatus {
        self.state.status
    }

    /// Returns the renderer handle of the mounted list.
    #[must_use]
    pub fn handle(&self) -> MountHandle {
        self.state.handle
    }

    /// Returns the projects currently shown, in display order.
    #[must_use]
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.state
            .assigned
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the drag sources for the projects currently shown.
    #[must_use]
    pub fn items(&self) -> Vec<ProjectItem> {
        self.assigned_projects()
            .into_iter()
            .map(ProjectItem::new)
            .collect()
    }

    /// Returns the drag source for a shown project.
    #[must_use]
    pub fn item(&self, id: ProjectId) -> Option<ProjectItem> {
        self.state
            .assigned
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|project| project.id() == id)
            .cloned()
            .map(ProjectItem::new)
    }

    /// Returns `true` while an acceptable drag hovers over the list.
    #[must_use]
    pub fn is_droppable(&self) -> bool {
        self.state.droppable.load(Ordering::Relaxed)
    }
}

impl DragTarget for ProjectListView {
    fn on_drag_over(&self, transfer: &DataTransfer) -> bool {
        if transfer.first_type() != Some(PROJECT_ID_TYPE) {
            return false;
        }
        self.state.droppable.store(true, Ordering::Relaxed);
        true
    }

    fn on_drop(&self, transfer: &DataTransfer) -> bool {
        let status = self.state.status;
        let Some(payload) = transfer.get_data(PROJECT_ID_TYPE) else {
            debug!(%status, "drop without project payload ignored");
            return false;
        };
        let Ok(id) = payload.parse::<ProjectId>() else {
            debug!(%status, payload, "drop with malformed project id ignored");
            return false;
        };
        self.store.move_project(id, status)
    }

    fn on_drag_leave(&self) {
        self.state.droppable.store(false, Ordering::Relaxed);
    }
}

impl fmt::Debug for ProjectListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectListView")
            .field("status", &self.state.status)
            .field("handle", &self.state.handle)
            .field("droppable", &self.is_droppable())
            .finish_non_exhaustive()
    }
}
