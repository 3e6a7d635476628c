//! Observable in-memory project store.

use mockable::{Clock, DefaultClock};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::project::{
    domain::{NewProject, PeopleCount, Project, ProjectId, ProjectSnapshot, ProjectStatus},
    ports::ProjectObserver,
};

/// Single source of truth for every project on the board.
///
/// The store keeps projects in insertion order and notifies its observers
/// after every mutation. Observers run synchronously, in subscription order,
/// after the store has released its internal locks.
///
/// # Examples
///
/// ```
/// use project_board::project::domain::{PeopleCount, ProjectStatus};
/// use project_board::project::services::ProjectStore;
///
/// let store = ProjectStore::new();
/// let people = PeopleCount::new(3).expect("positive count");
/// let id = store.add_project("Build API", people, "REST service");
/// assert!(store.move_project(id, ProjectStatus::Closed));
/// assert_eq!(store.snapshot().with_status(ProjectStatus::Closed).len(), 1);
/// ```
pub struct ProjectStore {
    projects: RwLock<Vec<Project>>,
    observers: RwLock<Vec<Arc<dyn ProjectObserver>>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl ProjectStore {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty store stamping projects with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
            observers: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Appends a new open project and notifies observers.
    ///
    /// Inputs are expected to be validated already. The returned identifier
    /// is distinct from every identifier this store has issued.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        people: PeopleCount,
        description: impl Into<String>,
    ) -> ProjectId {
        self.add(NewProject::new(title, people, description))
    }

    /// Appends a new open project built from `new_project` and notifies
    /// observers.
    pub fn add(&self, new_project: NewProject) -> ProjectId {
        let (id, snapshot) = {
            let mut projects = self.write_projects();
            let id = fresh_id(&projects);
            projects.push(Project::open(id, new_project, &*self.clock));
            debug!(project_id = %id, total = projects.len(), "project added");
            (id, ProjectSnapshot::capture(&projects))
        };
        self.notify(&snapshot);
        id
    }

    /// Moves the project with `id` into `status`.
    ///
    /// Returns `false` without mutating or notifying when no project has
    /// that identifier. Moving a project into the status it already has
    /// still counts as a move and notifies observers.
    pub fn move_project(&self, id: ProjectId, status: ProjectStatus) -> bool {
        let snapshot = {
            let mut projects = self.write_projects();
            let Some(project) = projects.iter_mut().find(|project| project.id() == id) else {
                debug!(project_id = %id, %status, "move ignored for unknown project");
                return false;
            };
            project.set_status(status, &*self.clock);
            debug!(project_id = %id, %status, "project moved");
            ProjectSnapshot::capture(&projects)
        };
        self.notify(&snapshot);
        true
    }

    /// Registers an observer for every future mutation.
    ///
    /// The observer is not invoked with the current state; it first hears
    /// from the store on the next mutation.
    pub fn subscribe(&self, observer: impl ProjectObserver + 'static) {
        self.subscribe_shared(Arc::new(observer));
    }

    /// Registers an already shared observer.
    pub fn subscribe_shared(&self, observer: Arc<dyn ProjectObserver>) {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        observers.push(observer);
        debug!(observers = observers.len(), "observer subscribed");
    }

    /// Returns a snapshot of the current collection.
    #[must_use]
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot::capture(&self.read_projects())
    }

    /// Returns the number of projects in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_projects().len()
    }

    /// Returns `true` when the store holds no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_projects().is_empty()
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, snapshot: &ProjectSnapshot) {
        // Copy the list so observers may subscribe or read the store.
        let observers = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in observers {
            observer.on_projects_changed(snapshot.clone());
        }
    }

    fn read_projects(&self) -> RwLockReadGuard<'_, Vec<Project>> {
        self.projects.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_projects(&self) -> RwLockWriteGuard<'_, Vec<Project>> {
        self.projects.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.len())
            .field("observers", &self.observer_count())
            .finish_non_exhaustive()
    }
}

/// Generates an identifier not yet present in `projects`.
fn fresh_id(projects: &[Project]) -> ProjectId {
    loop {
        let candidate = ProjectId::new();
        if projects.iter().all(|project| project.id() != candidate) {
            return candidate;
        }
    }
}
