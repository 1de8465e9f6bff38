//! 2D Delaunay triangulation (Bowyer–Watson).
//!
//! Small incremental implementation for the decorative background mesh. The
//! path point sequences it sees are tiny (tens of points) and frequently
//! contain exact repeats, so coincident points are merged up front and the
//! insertion loop stays quadratic without consequence.

use nalgebra::Vector2;

const MERGE_EPS: f64 = 1e-9;

/// Merge coincident points (within `MERGE_EPS`), preserving first-seen order.
fn merge_points(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut out: Vec<Vector2<f64>> = Vec::with_capacity(points.len());
    for p in points {
        if !out.iter().any(|q| (p - q).norm() < MERGE_EPS) {
            out.push(*p);
        }
    }
    out
}

#[inline]
fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Is `p` strictly inside the circumcircle of CCW triangle `(a, b, c)`?
fn in_circumcircle(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, p: Vector2<f64>) -> bool {
    let (ax, ay) = (a.x - p.x, a.y - p.y);
    let (bx, by) = (b.x - p.x, b.y - p.y);
    let (cx, cy) = (c.x - p.x, c.y - p.y);
    let det = (ax * ax + ay * ay) * (bx * cy - cx * by)
        - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);
    det > 0.0
}

/// Triangulate `points`, merging coincident inputs first.
///
/// Returns the merged point list and triangles as index triples into it.
/// Fewer than 3 distinct points, or an entirely collinear set, yield no
/// triangles.
pub fn triangulate(points: &[Vector2<f64>]) -> (Vec<Vector2<f64>>, Vec<[usize; 3]>) {
    let pts = merge_points(points);
    if pts.len() < 3 {
        return (pts, Vec::new());
    }

    // Super-triangle comfortably containing every point.
    let (mut lo, mut hi) = (pts[0], pts[0]);
    for p in &pts {
        lo = Vector2::new(lo.x.min(p.x), lo.y.min(p.y));
        hi = Vector2::new(hi.x.max(p.x), hi.y.max(p.y));
    }
    let span = (hi - lo).norm().max(1.0);
    let mid = (lo + hi) * 0.5;
    let s0 = mid + Vector2::new(-20.0 * span, -10.0 * span);
    let s1 = mid + Vector2::new(20.0 * span, -10.0 * span);
    let s2 = mid + Vector2::new(0.0, 20.0 * span);

    // Working vertex list: real points, then the three super vertices.
    let n = pts.len();
    let mut verts = pts.clone();
    verts.extend([s0, s1, s2]);
    let mut tris: Vec<[usize; 3]> = vec![[n, n + 1, n + 2]];

    for pi in 0..n {
        let p = verts[pi];
        // Triangles whose circumcircle contains p.
        let (bad, keep): (Vec<[usize; 3]>, Vec<[usize; 3]>) = tris
            .into_iter()
            .partition(|&[a, b, c]| in_circumcircle(verts[a], verts[b], verts[c], p));
        tris = keep;
        // Boundary of the bad region: edges not shared by two bad triangles.
        let mut boundary: Vec<(usize, usize)> = Vec::new();
        for &[a, b, c] in &bad {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                if let Some(k) = boundary.iter().position(|&(x, y)| (x, y) == (v, u)) {
                    boundary.swap_remove(k);
                } else {
                    boundary.push((u, v));
                }
            }
        }
        // Re-triangulate the hole, keeping CCW orientation.
        for (u, v) in boundary {
            let tri = if orient(verts[u], verts[v], p) > 0.0 {
                [u, v, pi]
            } else {
                [v, u, pi]
            };
            if orient(verts[tri[0]], verts[tri[1]], verts[tri[2]]).abs() > f64::EPSILON {
                tris.push(tri);
            }
        }
    }

    tris.retain(|t| t.iter().all(|&v| v < n));
    (pts, tris)
}

/// Distinct undirected triangle edges of the triangulation, as coordinate
/// pairs of the merged points.
pub fn triangulation_edges(points: &[Vector2<f64>]) -> Vec<(Vector2<f64>, Vector2<f64>)> {
    let (pts, tris) = triangulate(points);
    let mut seen: Vec<(usize, usize)> = Vec::new();
    for [a, b, c] in tris {
        for (u, v) in [(a, b), (b, c), (c, a)] {
            let key = (u.min(v), u.max(v));
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
    }
    seen.into_iter().map(|(u, v)| (pts[u], pts[v])).collect()
}
