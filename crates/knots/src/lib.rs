//! Knot diagrams from Planar Diagram codes, plus the quiz pair sampler.
//!
//! Pipeline: a validated `PdCode` yields a connectivity graph over its arcs,
//! a circular crossing layout, and a greedy arc traversal; the renderer
//! turns those into a backend-independent `Scene` of draw primitives.
//! Equivalence in the quiz is identity of the generating catalog name, by
//! design, never a computed invariant.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; breaking
//!   changes are fine when they improve the design.

pub mod api;
pub mod catalog;
pub mod diagram;
pub mod knot;
pub mod pd;
pub mod quiz;
pub mod render;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::catalog::{names, pd_code, quiz_names, UNKNOT};
    pub use crate::diagram::{build_graph, circular_layout, trace_path, ArcGraph, LAYOUT_RADIUS};
    pub use crate::knot::Knot;
    pub use crate::pd::{ArcId, Crossing, PdCode, PdError};
    pub use crate::quiz::{draw_pair, KnotPair, PairError, ReplayToken};
    pub use crate::render::{build_scene, Color, DrawCmd, Scene, Style, VIEWPORT};
    pub use nalgebra::Vector2 as Vec2;
}
