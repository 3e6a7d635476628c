//! Project board: an observable in-memory store of projects shown in two
//! status lists, with drag and drop moving projects between them.
//!
//! # Architecture
//!
//! The board follows hexagonal architecture principles:
//!
//! - **Domain**: Pure project model with no infrastructure dependencies
//! - **Ports**: Trait interfaces for observers, renderers and validators
//! - **Adapters**: Concrete implementations of ports (template rendering)
//!
//! # Modules
//!
//! - [`project`]: Project model, store, validation and list views
//! - [`console`]: Line-oriented front end used by the `project_board` binary

pub mod console;
pub mod project;
