//! Connectivity graph over arc identifiers.

use std::collections::HashMap;

use crate::pd::{ArcId, PdCode};

/// Simple undirected graph over the arcs of a PD code.
///
/// Nodes are interned in first-appearance order; `adj[k]` lists the neighbor
/// indices of node `k`, also in first-insertion order and without
/// multiplicity. Iteration order is therefore fully determined by the code.
#[derive(Clone, Debug)]
pub struct ArcGraph {
    nodes: Vec<ArcId>,
    index: HashMap<ArcId, usize>,
    adj: Vec<Vec<usize>>,
}

impl ArcGraph {
    fn intern(&mut self, arc: ArcId) -> usize {
        if let Some(&k) = self.index.get(&arc) {
            return k;
        }
        let k = self.nodes.len();
        self.nodes.push(arc);
        self.index.insert(arc, k);
        self.adj.push(Vec::new());
        k
    }

    fn add_edge(&mut self, a: ArcId, b: ArcId) {
        let i = self.intern(a);
        let j = self.intern(b);
        if !self.adj[i].contains(&j) {
            self.adj[i].push(j);
            self.adj[j].push(i);
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes in first-appearance order.
    #[inline]
    pub fn nodes(&self) -> &[ArcId] {
        &self.nodes
    }

    /// Neighbors of `arc`, in insertion order. Empty for unknown arcs.
    pub fn neighbors(&self, arc: ArcId) -> impl Iterator<Item = ArcId> + '_ {
        let out: &[usize] = match self.index.get(&arc) {
            Some(&k) => self.adj[k].as_slice(),
            None => &[],
        };
        out.iter().map(|&j| self.nodes[j])
    }

    pub fn has_edge(&self, a: ArcId, b: ArcId) -> bool {
        match (self.index.get(&a), self.index.get(&b)) {
            (Some(&i), Some(&j)) => self.adj[i].contains(&j),
            _ => false,
        }
    }

    /// Intern index of `arc`, if present.
    #[inline]
    pub(crate) fn index_of(&self, arc: ArcId) -> Option<usize> {
        self.index.get(&arc).copied()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }
}

/// Build the connectivity graph of a PD code.
///
/// Each crossing `(a, b, c, d)` contributes its cyclic boundary
/// `(a,b) (b,c) (c,d) (d,a)` plus the two diagonals `(a,c) (b,d)`; duplicate
/// edges across crossings collapse (simple graph).
pub fn build_graph(pd: &PdCode) -> ArcGraph {
    let mut g = ArcGraph {
        nodes: Vec::new(),
        index: HashMap::new(),
        adj: Vec::new(),
    };
    for cross in pd.crossings() {
        let [a, b, c, d] = *cross;
        g.intern(a);
        g.intern(b);
        g.intern(c);
        g.intern(d);
        g.add_edge(a, b);
        g.add_edge(b, c);
        g.add_edge(c, d);
        g.add_edge(d, a);
        g.add_edge(a, c);
        g.add_edge(b, d);
    }
    g
}
