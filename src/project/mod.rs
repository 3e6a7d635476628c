//! Project board management.
//!
//! Projects are created through a validated form, kept in a single
//! observable store, and shown in two lists partitioned by status. Dragging
//! a project from one list onto the other changes its status. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store and form services in [`services`]
//! - Form rules in [`validation`]
//! - List views and drag/drop in [`view`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;
pub mod view;

#[cfg(test)]
mod tests;
