//! Greedy arc traversal.

use crate::pd::ArcId;

use super::graph::ArcGraph;

/// Walk the connectivity graph greedily and return the visited arc sequence.
///
/// Starts at the first node in graph iteration order and repeatedly steps to
/// the first not-yet-visited neighbor of the current node; stops when none
/// remains. If the start node is adjacent to the final node, it is appended
/// once more to close the visual loop.
///
/// This is a single non-backtracking path, not an Eulerian or Hamiltonian
/// trace: arcs can be left unvisited, and a disconnected graph is covered
/// only within the start component. Both are accepted approximations.
pub fn trace_path(g: &ArcGraph) -> Vec<ArcId> {
    let nodes = g.nodes();
    let Some(&start) = nodes.first() else {
        return Vec::new();
    };
    let mut visited = vec![false; g.node_count()];
    let ix = |arc: ArcId| g.index_of(arc).unwrap_or(0);
    visited[ix(start)] = true;
    let mut path = vec![start];
    let mut current = start;
    loop {
        let next = g.neighbors(current).find(|&n| !visited[ix(n)]);
        let Some(next) = next else { break };
        visited[ix(next)] = true;
        path.push(next);
        current = next;
    }
    if g.has_edge(current, start) {
        path.push(start);
    }
    path
}
