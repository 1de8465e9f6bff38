//! A named knot diagram with all derived drawing data.

use nalgebra::Vector2;

use crate::diagram::{build_graph, circular_layout, trace_path, ArcGraph};
use crate::pd::{ArcId, PdCode, PdError};

/// One knot instance: a name, its PD code, and the artifacts derived from it.
///
/// Everything is computed once at construction and immutable afterwards; a
/// new quiz round builds fresh instances rather than mutating old ones.
#[derive(Clone, Debug)]
pub struct Knot {
    name: String,
    pd: PdCode,
    graph: ArcGraph,
    positions: Vec<Vector2<f64>>,
    path: Vec<ArcId>,
}

impl Knot {
    /// Validate the rows and derive graph, layout, and traversal.
    pub fn from_rows(name: impl Into<String>, rows: &[&[u32]]) -> Result<Self, PdError> {
        Ok(Self::from_pd(name, PdCode::from_rows(rows)?))
    }

    /// Derive graph, layout, and traversal from an already validated code.
    pub fn from_pd(name: impl Into<String>, pd: PdCode) -> Self {
        let graph = build_graph(&pd);
        let positions = circular_layout(pd.crossing_count());
        let path = trace_path(&graph);
        Self {
            name: name.into(),
            pd,
            graph,
            positions,
            path,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn pd(&self) -> &PdCode {
        &self.pd
    }

    #[inline]
    pub fn graph(&self) -> &ArcGraph {
        &self.graph
    }

    /// Crossing positions, indexed like the PD code.
    #[inline]
    pub fn positions(&self) -> &[Vector2<f64>] {
        &self.positions
    }

    /// The traced arc sequence (possibly closed by a repeat of the start).
    #[inline]
    pub fn path(&self) -> &[ArcId] {
        &self.path
    }

    /// Drawn position of an arc: the position of the first crossing (in PD
    /// order) containing it. Arcs outside every crossing have none.
    pub fn arc_position(&self, arc: ArcId) -> Option<Vector2<f64>> {
        self.pd.first_crossing_of(arc).map(|i| self.positions[i])
    }

    /// Positions of the traced path, skipping arcs without one.
    pub fn path_points(&self) -> Vec<Vector2<f64>> {
        self.path
            .iter()
            .filter_map(|&a| self.arc_position(a))
            .collect()
    }
}
