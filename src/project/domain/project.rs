//! Project entity and its status partition.

use super::{ParseProjectStatusError, PeopleCount, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board column a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is ongoing. Shown in the active list.
    Open,
    /// Work has finished. Shown in the finished list.
    Closed,
}

impl ProjectStatus {
    /// Every status, in board display order.
    pub const ALL: [Self; 2] = [Self::Open, Self::Closed];

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns the list slug used for view element identifiers.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Open => "active",
            Self::Closed => "finished",
        }
    }

    /// Returns the heading displayed above the list for this status.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Open => "ACTIVE PROJECTS",
            Self::Closed => "FINISHED PROJECTS",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" | "active" => Ok(Self::Open),
            "closed" | "finished" => Ok(Self::Closed),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A work item on the board.
///
/// Title and description are expected to be validated by the caller; the
/// entity only guarantees a positive people count through [`PeopleCount`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: PeopleCount,
    status: ProjectStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object describing a project that is about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    /// Short project title.
    pub title: String,
    /// Number of people working on the project.
    pub people: PeopleCount,
    /// Free-form project description.
    pub description: String,
}

impl NewProject {
    /// Creates a new-project description.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        people: PeopleCount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            people,
            description: description.into(),
        }
    }
}

impl Project {
    /// Creates an open project with the given identifier.
    #[must_use]
    pub fn open(id: ProjectId, new_project: NewProject, clock: &dyn Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title: new_project.title,
            description: new_project.description,
            people: new_project.people,
            status: ProjectStatus::Open,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of people assigned.
    #[must_use]
    pub const fn people(&self) -> PeopleCount {
        self.people
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest status change.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the project into `status`. Only the store mutates projects.
    pub(crate) fn set_status(&mut self, status: ProjectStatus, clock: &dyn Clock) {
        self.status = status;
        self.updated_at = clock.utc();
    }
}
