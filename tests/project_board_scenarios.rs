//! Behaviour tests for the project board.

mod project_board_steps;

use project_board_steps::world::{BoardWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/project_board.feature",
    name = "Submitted project appears in the active list"
)]
fn submitted_project_is_active(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/project_board.feature",
    name = "Dragging a project onto the finished list closes it"
)]
fn drag_closes_project(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/project_board.feature",
    name = "Dragging a finished project back reopens it"
)]
fn drag_back_reopens_project(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/project_board.feature",
    name = "Invalid form input is rejected"
)]
fn invalid_form_rejected(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/project_board.feature",
    name = "Dropping an unknown payload changes nothing"
)]
fn unknown_payload_ignored(world: BoardWorld) {
    let _ = world;
}
