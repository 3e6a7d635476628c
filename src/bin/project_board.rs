//! Runs the project board from a command script or standard input.
//!
//! Usage:
//!
//! ```text
//! project_board [--log-level <filter>] [--strict | --lenient] [--script <path>]
//! ```
//!
//! Every line is one console command; see `help` for the list. A
//! representative script is:
//!
//! ```text
//! add Build API | 3 | REST service
//! show
//! ```
//!
//! Command output goes to stdout, failures and logs to stderr. The exit code
//! is non-zero when any command failed.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use clap::Parser;
use project_board::console::{Console, ConsoleError};
use project_board::project::ports::{ProjectInputValidator, ValidationConfig};
use project_board::project::validation::service::DefaultProjectInputValidator;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "project_board", about = "Drive a project board from text commands")]
struct Args {
    /// Log filter directive, such as `info` or `project_board=debug`.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Apply upper bounds to every form field.
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// Only require non-empty fields and a positive people count.
    #[arg(long)]
    lenient: bool,

    /// Read commands from this file instead of standard input.
    #[arg(long)]
    script: Option<Utf8PathBuf>,
}

impl Args {
    fn validation_config(&self) -> ValidationConfig {
        if self.strict {
            ValidationConfig::strict()
        } else if self.lenient {
            ValidationConfig::lenient()
        } else {
            ValidationConfig::default()
        }
    }
}

/// Errors that stop the board before or while reading commands.
#[derive(Debug, Error)]
enum RunError {
    #[error("invalid log filter '{filter}': {reason}")]
    LogFilter { filter: String, reason: String },
    #[error("failed to read script '{path}': {source}")]
    Script { path: Utf8PathBuf, source: io::Error },
    #[error("failed to start board: {0}")]
    Startup(#[from] ConsoleError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> Result<ExitCode, BoxError> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let validator = DefaultProjectInputValidator::with_config(args.validation_config());
    let console = Console::new(validator).map_err(RunError::from)?;

    let lines: Vec<String> = match &args.script {
        Some(path) => read_script(path)?.lines().map(str::to_owned).collect(),
        None => io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?,
    };

    let failures = run_lines(&console, &lines)?;
    info!(commands = lines.len(), failures, "script finished");
    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(filter: &str) -> Result<(), RunError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|err| RunError::LogFilter {
        filter: filter.to_owned(),
        reason: err.to_string(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn read_script(path: &Utf8Path) -> Result<String, RunError> {
    let script_error = |source: io::Error| RunError::Script {
        path: path.to_owned(),
        source,
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| script_error(io::Error::other("path must include a file name")))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(script_error)?;
    dir.read_to_string(file_name).map_err(script_error)
}

fn run_lines<V>(console: &Console<V>, lines: &[String]) -> Result<usize, RunError>
where
    V: ProjectInputValidator,
{
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let mut failures = 0_usize;

    for (index, line) in lines.iter().enumerate() {
        match console.execute_line(line) {
            Ok(output) if output.is_empty() => {}
            Ok(output) => writeln!(out, "{output}")?,
            Err(error) => {
                failures += 1;
                warn!(line = index + 1, %error, "command failed");
                writeln!(err, "line {}: {error}", index + 1)?;
            }
        }
    }
    out.flush()?;
    Ok(failures)
}
