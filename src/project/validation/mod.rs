//! Project form validation.
//!
//! Field rules live in [`rules`]; [`service`] combines them into the default
//! [`ProjectInputValidator`](crate::project::ports::validator::ProjectInputValidator).

pub mod rules;
pub mod service;
