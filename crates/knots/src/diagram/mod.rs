//! Diagram construction: connectivity graph, circular layout, arc traversal.
//!
//! Purpose
//! - Turn a validated PD code into the three derived artifacts a drawing
//!   needs: an undirected arc-connectivity graph, one 2D position per
//!   crossing, and a single greedy path through the graph.
//!
//! Why this design
//! - Node and neighbor order are fixed to first appearance in the PD code, so
//!   every derived artifact is deterministic for a given code.
//! - The traversal is deliberately a greedy single walk, not an Eulerian
//!   circuit of the 4-regular diagram graph; the rendered shapes depend on
//!   exactly this approximation.
//!
//! Code cross-refs: `pd::{ArcId, PdCode}`, `render::scene`.

mod graph;
mod layout;
mod trace;

pub use graph::{build_graph, ArcGraph};
pub use layout::{circular_layout, LAYOUT_RADIUS};
pub use trace::trace_path;

#[cfg(test)]
mod tests;
