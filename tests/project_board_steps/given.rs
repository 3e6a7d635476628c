//! Given steps for project board BDD scenarios.

use super::world::BoardWorld;
use eyre::{Result, eyre};
use project_board::console::Command;
use project_board::project::ports::ProjectForm;
use rstest_bdd_macros::given;

#[given("an empty project board")]
fn empty_board(world: &mut BoardWorld) -> Result<()> {
    if !world.console.store().is_empty() {
        return Err(eyre!("expected a fresh board"));
    }
    world.last_error = None;
    world.last_drag_moved = None;
    Ok(())
}

#[given(r#"a board with the project "{title}""#)]
fn board_with_project(world: &mut BoardWorld, title: String) -> Result<()> {
    let form = ProjectForm::new(title.as_str(), "Seeded for the scenario", "2");
    world
        .console
        .execute(Command::Add(form))
        .map_err(|err| eyre!("seeding '{title}' failed: {err}"))?;
    Ok(())
}
