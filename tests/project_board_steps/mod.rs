//! Step definitions and world for project board BDD scenarios.

pub mod world;
mod given;
mod when;
mod then;
