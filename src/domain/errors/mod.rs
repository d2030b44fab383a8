//! Domain error types.

mod render_error;

pub use render_error::RenderError;
