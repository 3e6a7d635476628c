//! Template-based rendering adapter.

mod renderer;

pub use renderer::TemplateRenderer;
