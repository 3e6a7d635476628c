//! Line-oriented front end for the project board.
//!
//! Each input line is one command. The console owns a store, the active and
//! finished lists, and the form service, and wires them the way a page would:
//! form submissions go through validation, drags go from a list item to the
//! target list.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::project::{
    adapters::template::TemplateRenderer,
    domain::{ParseProjectIdError, ParseProjectStatusError, ProjectId, ProjectStatus},
    error::InputValidationError,
    ports::{ProjectForm, ProjectInputValidator, RenderError},
    services::{ProjectInputService, ProjectStore},
    view::{DataTransfer, DragTarget, Draggable, PROJECT_ID_TYPE, ProjectListView},
};

/// Help text listing the supported commands.
pub const HELP: &str = "\
commands:
  add <title> | <people> | <description>   submit the project form
  drag <id> <open|closed>                  drag a project onto a list
  move <id> <open|closed>                  change a project's status directly
  show                                     print both lists
  json                                     print every project as JSON
  help                                     print this help";

const ADD_USAGE: &str = "add <title> | <people> | <description>";
const DRAG_USAGE: &str = "drag <id> <open|closed>";
const MOVE_USAGE: &str = "move <id> <open|closed>";

/// Errors surfaced to the console user.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The command word is not recognised.
    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),

    /// The command arguments do not match its usage.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// A status argument could not be parsed.
    #[error(transparent)]
    Status(#[from] ParseProjectStatusError),

    /// A project identifier argument could not be parsed.
    #[error(transparent)]
    Id(#[from] ParseProjectIdError),

    /// The project form was rejected.
    #[error("invalid input: {0}")]
    Input(#[from] InputValidationError),

    /// A list could not be mounted or read back.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The board could not be serialised.
    #[error("failed to serialise board: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the project form.
    Add(ProjectForm),
    /// Drag the project with the raw identifier onto the target list.
    Drag {
        /// Identifier text carried as the drag payload.
        id: String,
        /// Status of the list receiving the drop.
        target: ProjectStatus,
    },
    /// Move a project without going through drag/drop.
    Move {
        /// Project to move.
        id: ProjectId,
        /// New status.
        target: ProjectStatus,
    },
    /// Print both lists.
    Show,
    /// Print the whole board as JSON.
    Json,
    /// Print the command summary.
    Help,
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(word, rest)| (word, rest.trim()));
        match word.to_ascii_lowercase().as_str() {
            "add" => parse_add(rest),
            "drag" => {
                let (id, target) = parse_id_and_status(rest, DRAG_USAGE)?;
                Ok(Self::Drag {
                    id: id.to_owned(),
                    target,
                })
            }
            "move" => {
                let (id, target) = parse_id_and_status(rest, MOVE_USAGE)?;
                Ok(Self::Move {
                    id: id.parse()?,
                    target,
                })
            }
            "show" => Ok(Self::Show),
            "json" => Ok(Self::Json),
            "help" => Ok(Self::Help),
            _ => Err(ConsoleError::UnknownCommand(word.to_owned())),
        }
    }
}

fn parse_add(rest: &str) -> Result<Command, ConsoleError> {
    let mut fields = rest.split('|').map(str::trim);
    let (Some(title), Some(people), Some(description), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(ConsoleError::Usage(ADD_USAGE));
    };
    Ok(Command::Add(ProjectForm::new(title, description, people)))
}

fn parse_id_and_status<'a>(
    rest: &'a str,
    usage: &'static str,
) -> Result<(&'a str, ProjectStatus), ConsoleError> {
    let mut words = rest.split_whitespace();
    let (Some(id), Some(status), None) = (words.next(), words.next(), words.next()) else {
        return Err(ConsoleError::Usage(usage));
    };
    Ok((id, ProjectStatus::try_from(status)?))
}

/// A project board driven by text commands.
pub struct Console<V>
where
    V: ProjectInputValidator,
{
    store: Arc<ProjectStore>,
    renderer: Arc<TemplateRenderer>,
    active: ProjectListView,
    finished: ProjectListView,
    input: ProjectInputService<V>,
}

impl<V> Console<V>
where
    V: ProjectInputValidator,
{
    /// Creates a console over a fresh store.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Render`] when the list templates cannot be
    /// mounted.
    pub fn new(validator: V) -> Result<Self, ConsoleError> {
        Self::with_store(Arc::new(ProjectStore::new()), validator)
    }

    /// Creates a console over an existing store.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Render`] when the list templates cannot be
    /// mounted.
    pub fn with_store(store: Arc<ProjectStore>, validator: V) -> Result<Self, ConsoleError> {
        let renderer = Arc::new(TemplateRenderer::new()?);
        let active =
            ProjectListView::mount(Arc::clone(&store), ProjectStatus::Open, renderer.clone())?;
        let finished =
            ProjectListView::mount(Arc::clone(&store), ProjectStatus::Closed, renderer.clone())?;
        let input = ProjectInputService::new(Arc::clone(&store), validator);
        Ok(Self {
            store,
            renderer,
            active,
            finished,
            input,
        })
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &Arc<ProjectStore> {
        &self.store
    }

    /// Returns the list showing projects with `status`.
    #[must_use]
    pub const fn view(&self, status: ProjectStatus) -> &ProjectListView {
        match status {
            ProjectStatus::Open => &self.active,
            ProjectStatus::Closed => &self.finished,
        }
    }

    /// Parses and runs one input line.
    ///
    /// Blank lines and lines starting with `#` produce no output.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] when the line cannot be parsed or the command
    /// fails.
    pub fn execute_line(&self, line: &str) -> Result<String, ConsoleError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(String::new());
        }
        self.execute(trimmed.parse()?)
    }

    /// Runs one command and returns its output.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] when the command fails.
    pub fn execute(&self, command: Command) -> Result<String, ConsoleError> {
        match command {
            Command::Add(form) => {
                let id = self.input.submit(form)?;
                Ok(format!("added {id}"))
            }
            Command::Drag { id, target } => {
                let moved = self.drag(&id, target);
                Ok(describe_move(&id, target, moved))
            }
            Command::Move { id, target } => Ok(describe_move(
                &id,
                target,
                self.store.move_project(id, target),
            )),
            Command::Show => self.show(),
            Command::Json => Ok(serde_json::to_string_pretty(&self.store.snapshot())?),
            Command::Help => Ok(HELP.to_owned()),
        }
    }

    /// Performs a full drag of `raw_id` onto the list for `target`.
    ///
    /// When the identifier belongs to a shown project the drag starts from
    /// that project's item; otherwise the raw text is used as the payload.
    /// Returns `true` when the drop moved a project.
    pub fn drag(&self, raw_id: &str, target: ProjectStatus) -> bool {
        let source = raw_id.parse::<ProjectId>().ok().and_then(|id| {
            ProjectStatus::ALL
                .into_iter()
                .find_map(|status| self.view(status).item(id))
        });

        let mut transfer = DataTransfer::new();
        match &source {
            Some(item) => item.on_drag_start(&mut transfer),
            None => transfer.set_data(PROJECT_ID_TYPE, raw_id),
        }

        let target_view = self.view(target);
        let moved = target_view.on_drag_over(&transfer) && target_view.on_drop(&transfer);
        target_view.on_drag_leave();
        if let Some(item) = &source {
            item.on_drag_end(&transfer);
        }
        debug!(payload = raw_id, %target, moved, "drag finished");
        moved
    }

    /// Renders both lists, active first.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Render`] if a list has no rendered output.
    pub fn show(&self) -> Result<String, ConsoleError> {
        let mut blocks = Vec::with_capacity(ProjectStatus::ALL.len());
        for status in ProjectStatus::ALL {
            let handle = self.view(status).handle();
            let output = self
                .renderer
                .output(handle)
                .ok_or(RenderError::UnknownHandle(handle))?;
            blocks.push(output);
        }
        Ok(blocks.join("\n\n"))
    }
}

impl<V> fmt::Debug for Console<V>
where
    V: ProjectInputValidator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("store", &self.store)
            .field("active", &self.active)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

fn describe_move(id: &dyn fmt::Display, target: ProjectStatus, moved: bool) -> String {
    if moved {
        format!("moved {id} to {target}")
    } else {
        format!("no project moved: {id} not found")
    }
}
