//! Then steps for project board BDD scenarios.

use super::world::{BoardWorld, list_status};
use eyre::{Result, eyre};
use project_board::console::ConsoleError;
use rstest_bdd_macros::then;

#[then(r#"the {list} list shows only "{title}""#)]
fn list_shows(world: &BoardWorld, list: String, title: String) -> Result<()> {
    let status = list_status(&list)?;
    let titles = world.titles_in(status);
    if titles != [title.clone()] {
        return Err(eyre!(
            "expected the {list} list to show only '{title}', got {titles:?}"
        ));
    }
    let rendered = world
        .console
        .show()
        .map_err(|err| eyre!("rendering failed: {err}"))?;
    if !rendered.contains(&title) {
        return Err(eyre!("rendered board does not mention '{title}'"));
    }
    Ok(())
}

#[then(r#"the {list} list shows "{first}" then "{second}""#)]
fn list_shows_in_order(
    world: &BoardWorld,
    list: String,
    first: String,
    second: String,
) -> Result<()> {
    let status = list_status(&list)?;
    let titles = world.titles_in(status);
    if titles != [first.clone(), second.clone()] {
        return Err(eyre!(
            "expected [{first}, {second}] in the {list} list, got {titles:?}"
        ));
    }
    Ok(())
}

#[then("the {list} list is empty")]
fn list_is_empty(world: &BoardWorld, list: String) -> Result<()> {
    let status = list_status(&list)?;
    let titles = world.titles_in(status);
    if !titles.is_empty() {
        return Err(eyre!("expected the {list} list to be empty, got {titles:?}"));
    }
    Ok(())
}

#[then("the board holds {count:usize} projects")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<()> {
    let actual = world.console.store().len();
    if actual != count {
        return Err(eyre!("expected {count} projects, found {actual}"));
    }
    Ok(())
}

#[then(r#"the submission is rejected for the "{field}" field"#)]
fn submission_rejected(world: &BoardWorld, field: String) -> Result<()> {
    let Some(ConsoleError::Input(error)) = &world.last_error else {
        return Err(eyre!("expected an input error, got {:?}", world.last_error));
    };
    let fields: Vec<_> = error.errors().iter().filter_map(|e| e.field()).collect();
    if !fields.contains(&field.as_str()) {
        return Err(eyre!("expected a '{field}' error, got {error}"));
    }
    Ok(())
}

#[then("no project was moved")]
fn nothing_moved(world: &BoardWorld) -> Result<()> {
    match world.last_drag_moved {
        Some(false) => Ok(()),
        other => Err(eyre!("expected a rejected drop, got {other:?}")),
    }
}
