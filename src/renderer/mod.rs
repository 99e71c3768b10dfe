//! Frame description for the host's painter
//!
//! Produces flat rectangles, text labels and GPU-ready vertices; the host
//! owns the window and the actual drawing.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Label, Quad, Scene, score_text};
pub use vertex::Vertex;
