//! Shared world state for project board BDD scenarios.

use eyre::{Result, eyre};
use project_board::console::{Console, ConsoleError};
use project_board::project::domain::{Project, ProjectId, ProjectStatus};
use project_board::project::validation::service::DefaultProjectInputValidator;
use rstest::fixture;

/// Scenario world for project board behaviour tests.
pub struct BoardWorld {
    /// Console driving the board under test.
    pub console: Console<DefaultProjectInputValidator>,
    /// Error returned by the last rejected command.
    pub last_error: Option<ConsoleError>,
    /// Whether the last drag moved a project.
    pub last_drag_moved: Option<bool>,
}

impl BoardWorld {
    /// Creates a world around an empty board.
    ///
    /// # Panics
    ///
    /// Panics if the built-in list templates fail to mount.
    #[must_use]
    pub fn new() -> Self {
        let console = Console::new(DefaultProjectInputValidator::new())
            .expect("built-in list templates mount");
        Self {
            console,
            last_error: None,
            last_drag_moved: None,
        }
    }

    /// Looks up the identifier of the project titled `title`.
    pub fn id_of(&self, title: &str) -> Result<ProjectId> {
        self.console
            .store()
            .snapshot()
            .iter()
            .find(|project| project.title() == title)
            .map(Project::id)
            .ok_or_else(|| eyre!("no project titled '{title}'"))
    }

    /// Returns the titles shown in the list for `status`, in order.
    pub fn titles_in(&self, status: ProjectStatus) -> Vec<String> {
        self.console
            .view(status)
            .assigned_projects()
            .iter()
            .map(|project| project.title().to_owned())
            .collect()
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a list name used in step text.
pub fn list_status(name: &str) -> Result<ProjectStatus> {
    ProjectStatus::try_from(name).map_err(|err| eyre!("unknown list '{name}': {err}"))
}

#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::new()
}
