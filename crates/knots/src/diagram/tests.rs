//! Tests for graph construction, layout, and traversal.

use proptest::prelude::*;

use super::*;
use crate::pd::{ArcId, PdCode};

fn pd(rows: &[&[u32]]) -> PdCode {
    PdCode::from_rows(rows).expect("valid PD code")
}

#[test]
fn unknot_graph_has_four_nodes_and_six_edges() {
    let g = build_graph(&pd(&[&[1, 2, 3, 4]]));
    let mut nodes: Vec<u32> = g.nodes().iter().map(|a| a.0).collect();
    nodes.sort_unstable();
    assert_eq!(nodes, vec![1, 2, 3, 4]);
    assert_eq!(g.edge_count(), 6);
    for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 1), (1, 3), (2, 4)] {
        assert!(g.has_edge(ArcId(a), ArcId(b)), "missing edge ({a},{b})");
        assert!(g.has_edge(ArcId(b), ArcId(a)), "edge ({a},{b}) not symmetric");
    }
}

#[test]
fn shared_arcs_collapse_duplicate_edges() {
    // Crossings share the pair (1,2); the edge (1,2) must appear once.
    let g = build_graph(&pd(&[&[1, 2, 3, 4], &[2, 1, 5, 6]]));
    assert_eq!(g.node_count(), 6);
    // 12 raw edges minus the duplicated (1,2).
    assert_eq!(g.edge_count(), 11);
}

#[test]
fn node_set_equals_distinct_arcs() {
    let code = pd(&[&[1, 2, 3, 4], &[5, 6, 7, 8], &[9, 10, 11, 12]]);
    let g = build_graph(&code);
    let mut got: Vec<ArcId> = g.nodes().to_vec();
    got.sort();
    let mut want: Vec<ArcId> = code.crossings().iter().flatten().copied().collect();
    want.sort();
    want.dedup();
    assert_eq!(got, want);
}

#[test]
fn layout_places_points_on_the_circle() {
    for n in 1..=10 {
        let pts = circular_layout(n);
        assert_eq!(pts.len(), n);
        for (i, p) in pts.iter().enumerate() {
            assert!((p.norm() - LAYOUT_RADIUS).abs() < 1e-12);
            let th = (i as f64) * 2.0 * std::f64::consts::PI / (n as f64);
            assert!((p.x - th.cos() * LAYOUT_RADIUS).abs() < 1e-12);
            assert!((p.y - th.sin() * LAYOUT_RADIUS).abs() < 1e-12);
        }
    }
}

#[test]
fn layout_single_crossing_sits_at_angle_zero() {
    let pts = circular_layout(1);
    assert_eq!(pts.len(), 1);
    assert!((pts[0].x - LAYOUT_RADIUS).abs() < 1e-12);
    assert!(pts[0].y.abs() < 1e-12);
}

#[test]
fn trefoil_layout_angles() {
    let pts = circular_layout(3);
    let expect = [0.0f64, 120.0, 240.0];
    for (p, deg) in pts.iter().zip(expect) {
        let th = deg.to_radians();
        assert!((p.x - th.cos() * LAYOUT_RADIUS).abs() < 1e-12);
        assert!((p.y - th.sin() * LAYOUT_RADIUS).abs() < 1e-12);
    }
}

#[test]
fn trace_visits_edges_without_revisiting_nodes() {
    let g = build_graph(&pd(&[&[1, 2, 3, 4], &[5, 6, 7, 8]]));
    let path = trace_path(&g);
    assert!(!path.is_empty());
    // No duplicates except a possible closing repeat of the first arc.
    let closed = path.len() > 1 && path.first() == path.last();
    let body = if closed { &path[..path.len() - 1] } else { &path[..] };
    let mut seen = body.to_vec();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), body.len());
    // Every consecutive pair is a graph edge.
    for w in path.windows(2) {
        assert!(g.has_edge(w[0], w[1]), "step {}→{} is not an edge", w[0], w[1]);
    }
}

#[test]
fn trace_single_crossing_terminates_within_node_count() {
    let g = build_graph(&pd(&[&[1, 2, 3, 4]]));
    let path = trace_path(&g);
    let closed = path.first() == path.last() && path.len() > 1;
    let body_len = if closed { path.len() - 1 } else { path.len() };
    assert!(body_len <= g.node_count());
    // All four arcs are mutually adjacent here, so the walk covers them all
    // and closes: 1 → 2 → 3 → 4 → 1.
    let ids: Vec<u32> = path.iter().map(|a| a.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 1]);
}

#[test]
fn trace_starts_at_first_pd_arc() {
    let g = build_graph(&pd(&[&[7, 2, 9, 4], &[1, 3, 5, 6]]));
    assert_eq!(trace_path(&g)[0], ArcId(7));
}

#[test]
fn rebuilding_from_the_same_code_is_identical() {
    let code = pd(&[&[1, 2, 3, 4], &[5, 6, 7, 8], &[9, 10, 11, 12]]);
    let (g1, g2) = (build_graph(&code), build_graph(&code));
    assert_eq!(g1.nodes(), g2.nodes());
    assert_eq!(g1.edge_count(), g2.edge_count());
    assert_eq!(trace_path(&g1), trace_path(&g2));
    assert_eq!(
        circular_layout(code.crossing_count()),
        circular_layout(code.crossing_count())
    );
}

/// Random valid PD codes: `n` crossings over a shuffled relabeling of
/// `1..=4n`, chunked into quads.
fn arb_pd_code() -> impl Strategy<Value = PdCode> {
    (1usize..8)
        .prop_flat_map(|n| Just((1..=(4 * n) as u32).collect::<Vec<u32>>()).prop_shuffle())
        .prop_map(|labels| {
            let crossings = labels
                .chunks_exact(4)
                .map(|q| [ArcId(q[0]), ArcId(q[1]), ArcId(q[2]), ArcId(q[3])])
                .collect();
            PdCode::new(crossings).expect("distinct labels per crossing")
        })
}

proptest! {
    #[test]
    fn graph_invariants_hold_for_random_codes(code in arb_pd_code()) {
        let g = build_graph(&code);
        // Node set is exactly the distinct arcs.
        let mut arcs: Vec<ArcId> = code.crossings().iter().flatten().copied().collect();
        arcs.sort();
        arcs.dedup();
        prop_assert_eq!(g.node_count(), arcs.len());
        // At most six distinct edges per crossing.
        prop_assert!(g.edge_count() <= 6 * code.crossing_count());
    }

    #[test]
    fn trace_is_a_simple_graph_walk(code in arb_pd_code()) {
        let g = build_graph(&code);
        let path = trace_path(&g);
        prop_assert!(!path.is_empty());
        let closed = path.len() > 1 && path.first() == path.last();
        let body = if closed { &path[..path.len() - 1] } else { &path[..] };
        let mut seen = body.to_vec();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), body.len());
        for w in path.windows(2) {
            prop_assert!(g.has_edge(w[0], w[1]));
        }
    }
}
