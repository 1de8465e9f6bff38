//! Diagram rendering: backend-independent draw commands.
//!
//! Purpose
//! - Turn a knot instance into a `Scene`: an ordered list of primitive draw
//!   commands (polyline, marker, segment) with style attributes, inside a
//!   fixed [-2,2]² viewport. Any backend that can draw those three
//!   primitives can display a scene; the crate ships none.
//!
//! The scene layers, bottom to top: a decorative Delaunay mesh over the path
//! points (only when more than 3 points resolve), the bold knot polyline,
//! and one over/under glyph per crossing.
//!
//! Code cross-refs: `knot::Knot`, `delaunay::triangulate`.

mod delaunay;
mod scene;
mod types;

pub use delaunay::{triangulate, triangulation_edges};
pub use scene::{build_scene, VIEWPORT};
pub use types::{Color, DrawCmd, Scene, Style};
