//! Adapter implementations for project board ports.

pub mod template;
