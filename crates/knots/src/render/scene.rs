//! Scene assembly for one knot diagram.

use nalgebra::Vector2;

use crate::knot::Knot;

use super::delaunay::triangulation_edges;
use super::types::{Color, DrawCmd, Scene, Style};

/// Half-extent of the square viewport; coordinates live in [-2,2]².
pub const VIEWPORT: f64 = 2.0;

/// Half-length of the over-strand diagonal at a crossing glyph.
const GLYPH_REACH: f64 = 0.1;
/// Inner gap endpoint of the broken under-strand diagonal.
const GLYPH_GAP: f64 = 0.03;
/// Crossing marker radius.
const MARKER_RADIUS: f64 = 0.08;

fn mesh_style() -> Style {
    Style {
        color: Color::BLUE,
        width: 2.0,
        alpha: 0.6,
        z: 1,
    }
}

fn path_style() -> Style {
    Style {
        color: Color::RED,
        width: 3.0,
        alpha: 0.9,
        z: 2,
    }
}

fn glyph_style() -> Style {
    Style {
        color: Color::BLACK,
        width: 2.0,
        alpha: 1.0,
        z: 5,
    }
}

fn marker_style() -> Style {
    Style {
        color: Color::BLACK,
        width: 1.0,
        alpha: 1.0,
        z: 10,
    }
}

/// Build the drawing for `knot`, titled `"{title}: {name}"`.
///
/// Layers, bottom to top: translucent Delaunay mesh over the path points
/// (only when more than 3 resolve), the bold knot polyline, then per
/// crossing a broken-X glyph and a white marker. If no path point resolves
/// to a position, the scene is blank rather than an error.
pub fn build_scene(knot: &Knot, title: &str) -> Scene {
    let full_title = format!("{title}: {}", knot.name());
    let points = knot.path_points();
    if points.is_empty() {
        return Scene::blank(full_title, VIEWPORT);
    }

    let mut cmds: Vec<DrawCmd> = Vec::new();

    // Decorative mesh, not the knot itself.
    if points.len() > 3 {
        for (a, b) in triangulation_edges(&points) {
            cmds.push(DrawCmd::Segment {
                a,
                b,
                style: mesh_style(),
            });
        }
    }

    // Primary path.
    cmds.push(DrawCmd::Polyline {
        points,
        style: path_style(),
    });

    // Crossing glyphs. The same glyph is drawn at every crossing: the PD
    // codes here carry no over/under sign, so the solid diagonal always
    // plays the over strand and the broken one the under strand.
    for &pos in knot.positions() {
        cmds.extend(crossing_glyph(pos));
        cmds.push(DrawCmd::Marker {
            at: pos,
            radius: MARKER_RADIUS,
            fill: Color::WHITE,
            style: marker_style(),
        });
    }

    Scene {
        title: full_title,
        half_extent: VIEWPORT,
        cmds,
    }
}

/// The broken-X at one crossing: a solid over diagonal plus two disjoint
/// under stubs on the opposite diagonal.
fn crossing_glyph(pos: Vector2<f64>) -> [DrawCmd; 3] {
    let style = glyph_style();
    let (x, y) = (pos.x, pos.y);
    [
        DrawCmd::Segment {
            a: Vector2::new(x - GLYPH_REACH, y - GLYPH_REACH),
            b: Vector2::new(x + GLYPH_REACH, y + GLYPH_REACH),
            style,
        },
        DrawCmd::Segment {
            a: Vector2::new(x - GLYPH_REACH, y + GLYPH_REACH),
            b: Vector2::new(x - GLYPH_GAP, y + GLYPH_GAP),
            style,
        },
        DrawCmd::Segment {
            a: Vector2::new(x + GLYPH_GAP, y - GLYPH_GAP),
            b: Vector2::new(x + GLYPH_REACH, y - GLYPH_REACH),
            style,
        },
    ]
}
