//! Immutable point-in-time copies of the project collection.

use super::{Project, ProjectId, ProjectStatus};
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Immutable copy of the store's ordered project sequence.
///
/// Cloning a snapshot shares the same backing slice; later store mutations
/// never reach an existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshot {
    projects: Arc<[Project]>,
}

impl ProjectSnapshot {
    /// Captures a snapshot by copying the given projects.
    #[must_use]
    pub fn capture(projects: &[Project]) -> Self {
        Self {
            projects: Arc::from(projects),
        }
    }

    /// Returns an empty snapshot.
    #[must_use]
    pub fn empty() -> Self {
        Self::capture(&[])
    }

    /// Returns the number of projects in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` when the snapshot holds no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Returns the projects in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Project] {
        &self.projects
    }

    /// Iterates over the projects in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    /// Looks up a project by identifier.
    #[must_use]
    pub fn find(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    /// Returns the projects in one status partition, preserving order.
    #[must_use]
    pub fn with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|project| project.status() == status)
            .cloned()
            .collect()
    }
}

impl Default for ProjectSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a ProjectSnapshot {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ProjectSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}
