//! When steps for project board BDD scenarios.

use super::world::{BoardWorld, list_status};
use eyre::Result;
use project_board::console::Command;
use project_board::project::ports::ProjectForm;
use rstest_bdd_macros::when;

#[when(
    r#"the project "{title}" with {people:u32} people and description "{description}" is submitted"#
)]
fn submit_project(world: &mut BoardWorld, title: String, people: u32, description: String) {
    let form = ProjectForm::new(title, description, people.to_string());
    world.last_error = world.console.execute(Command::Add(form)).err();
}

#[when("a project form with a blank title is submitted")]
fn submit_blank_title(world: &mut BoardWorld) {
    let form = ProjectForm::new("   ", "REST service", "3");
    world.last_error = world.console.execute(Command::Add(form)).err();
}

#[when(r#""{title}" is dragged onto the {list} list"#)]
fn drag_project(world: &mut BoardWorld, title: String, list: String) -> Result<()> {
    let id = world.id_of(&title)?;
    let target = list_status(&list)?;
    world.last_drag_moved = Some(world.console.drag(&id.to_string(), target));
    Ok(())
}

#[when(r#"the text "{payload}" is dropped onto the {list} list"#)]
fn drop_raw_text(world: &mut BoardWorld, payload: String, list: String) -> Result<()> {
    let target = list_status(&list)?;
    world.last_drag_moved = Some(world.console.drag(&payload, target));
    Ok(())
}
