//! Circular crossing layout.

use nalgebra::Vector2;

/// Fixed layout radius; the viewport is [-2,2]² so the ring sits well inside.
pub const LAYOUT_RADIUS: f64 = 1.5;

/// One position per crossing, evenly spaced on a circle around the origin.
///
/// Point `i` sits at angle `i·2π/n` (counter-clockwise from the positive
/// x-axis) and corresponds to crossing `i` of the PD code. Positions are
/// layout aesthetics only; they never feed back into equivalence logic.
pub fn circular_layout(n: usize) -> Vec<Vector2<f64>> {
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    (0..n)
        .map(|i| {
            let th = (i as f64) * delta;
            Vector2::new(th.cos() * LAYOUT_RADIUS, th.sin() * LAYOUT_RADIUS)
        })
        .collect()
}
