//! Renderers and the Renderer trait.

pub mod canvas;
pub mod isometric;
pub mod projection;
pub mod sprite;

pub use canvas::Canvas;
pub use isometric::IsometricRenderer;
pub use projection::{Projection, to_canvas};

use crate::error::Result;
use crate::syntax::types::Diagram;

/// Trait for diagram renderers.
pub trait Renderer {
    /// Render a parsed diagram, drawing edges in the given occlusion order.
    fn render(&self, diagram: &Diagram, order: &[usize]) -> Result<Canvas>;
}
