//! SVG backend for `knots` scenes.
//!
//! Maps the fixed [-h,h]² scene viewport onto square pixel panels, paints
//! commands in z order, and can place two panels side by side for a quiz
//! round. String-built elements; no SVG library.

use std::fmt::Write as _;

use knots::api::{Color, DrawCmd, Scene};

/// Pixel size of one square panel.
pub const PANEL_PX: f64 = 600.0;
/// Vertical space reserved above each panel for its title.
const TITLE_PX: f64 = 36.0;

fn rgb(c: Color) -> String {
    format!("rgb({},{},{})", c.r, c.g, c.b)
}

/// Scene → pixel transform for a panel whose top-left is at `(ox, oy)`.
struct PanelMap {
    ox: f64,
    oy: f64,
    scale: f64,
    half: f64,
}

impl PanelMap {
    fn new(ox: f64, oy: f64, half_extent: f64) -> Self {
        Self {
            ox,
            oy,
            scale: PANEL_PX / (2.0 * half_extent),
            half: half_extent,
        }
    }

    #[inline]
    fn x(&self, x: f64) -> f64 {
        self.ox + (x + self.half) * self.scale
    }

    /// SVG y grows downward; scene y grows upward.
    #[inline]
    fn y(&self, y: f64) -> f64 {
        self.oy + (self.half - y) * self.scale
    }
}

fn paint_scene(out: &mut String, scene: &Scene, map: &PanelMap) {
    let _ = write!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="20" font-family="sans-serif">{}</text>"#,
        map.ox + PANEL_PX / 2.0,
        map.oy - TITLE_PX / 3.0,
        xml_escape(&scene.title)
    );
    // Stable sort: commands of equal z keep their emission order.
    let mut cmds: Vec<&DrawCmd> = scene.cmds.iter().collect();
    cmds.sort_by_key(|c| c.z());
    for cmd in cmds {
        match cmd {
            DrawCmd::Polyline { points, style } => {
                let mut d = String::new();
                for (i, p) in points.iter().enumerate() {
                    let _ = write!(
                        d,
                        "{}{:.2},{:.2}",
                        if i == 0 { "" } else { " " },
                        map.x(p.x),
                        map.y(p.y)
                    );
                }
                let _ = write!(
                    out,
                    r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{:.1}" stroke-opacity="{:.2}"/>"#,
                    d,
                    rgb(style.color),
                    style.width,
                    style.alpha
                );
            }
            DrawCmd::Segment { a, b, style } => {
                let _ = write!(
                    out,
                    r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.1}" stroke-opacity="{:.2}"/>"#,
                    map.x(a.x),
                    map.y(a.y),
                    map.x(b.x),
                    map.y(b.y),
                    rgb(style.color),
                    style.width,
                    style.alpha
                );
            }
            DrawCmd::Marker {
                at,
                radius,
                fill,
                style,
            } => {
                let _ = write!(
                    out,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                    map.x(at.x),
                    map.y(at.y),
                    radius * map.scale,
                    rgb(*fill),
                    rgb(style.color),
                    style.width
                );
            }
        }
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn document(body: &str, width: f64, height: f64) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" "#,
            r#"viewBox="0 0 {w:.0} {h:.0}">"#,
            r#"<rect width="100%" height="100%" fill="white"/>{body}</svg>"#
        ),
        w = width,
        h = height,
        body = body
    )
}

/// Render one scene as a standalone SVG document.
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut body = String::new();
    let map = PanelMap::new(0.0, TITLE_PX, scene.half_extent);
    paint_scene(&mut body, scene, &map);
    document(&body, PANEL_PX, PANEL_PX + TITLE_PX)
}

/// Render two scenes side by side (one quiz round).
pub fn pair_to_svg(left: &Scene, right: &Scene) -> String {
    let mut body = String::new();
    let gap = 20.0;
    paint_scene(&mut body, left, &PanelMap::new(0.0, TITLE_PX, left.half_extent));
    paint_scene(
        &mut body,
        right,
        &PanelMap::new(PANEL_PX + gap, TITLE_PX, right.half_extent),
    );
    document(&body, 2.0 * PANEL_PX + gap, PANEL_PX + TITLE_PX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use knots::api::{build_scene, Knot};

    fn unknot_scene() -> Scene {
        let k = Knot::from_rows("Unknot", &[&[1, 2, 3, 4]]).unwrap();
        build_scene(&k, "Knot A")
    }

    #[test]
    fn single_scene_document_shape() {
        let svg = scene_to_svg(&unknot_scene());
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        // One crossing: one marker circle, three glyph lines, one polyline.
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches("<line").count(), 3);
        assert_eq!(svg.matches("<polyline").count(), 1);
        assert!(svg.contains("Knot A: Unknot"));
    }

    #[test]
    fn pair_document_holds_both_titles() {
        let scene = unknot_scene();
        let svg = pair_to_svg(&scene, &scene);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("Knot A: Unknot").count(), 2);
    }

    #[test]
    fn y_axis_is_flipped() {
        let map = PanelMap::new(0.0, 0.0, 2.0);
        assert!(map.y(1.0) < map.y(-1.0));
        // Scene origin maps to the panel center.
        assert!((map.x(0.0) - PANEL_PX / 2.0).abs() < 1e-9);
        assert!((map.y(0.0) - PANEL_PX / 2.0).abs() < 1e-9);
    }
}
