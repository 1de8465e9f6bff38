//! Curated internal API (UNSTABLE).
//!
//! A flat convenience surface for project-internal callers; not a public
//! API. Prefer these re-exports for consistency across the cli and tests.

// PD data model and fixed dataset
pub use crate::catalog::{names, pd_code, quiz_names, UNKNOT};
pub use crate::pd::{ArcId, Crossing, PdCode, PdError};
// Diagram construction
pub use crate::diagram::{build_graph, circular_layout, trace_path, ArcGraph, LAYOUT_RADIUS};
pub use crate::knot::Knot;
// Rendering
pub use crate::render::{
    build_scene, triangulate, triangulation_edges, Color, DrawCmd, Scene, Style, VIEWPORT,
};
// Quiz pairs
pub use crate::quiz::{draw_pair, KnotPair, PairError, ReplayToken};
