//! Unit tests for the project board.

mod renderer_tests;
mod support;
