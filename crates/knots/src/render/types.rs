//! Data types for scenes and draw commands.
//!
//! Kept small and explicit so backends and the scene builder stay easy to
//! read.

use nalgebra::Vector2;

/// RGB color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
}

/// Stroke/fill attributes shared by all primitives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub color: Color,
    /// Stroke width (marker edge width for markers), in viewport units.
    pub width: f64,
    /// Opacity in [0,1].
    pub alpha: f64,
    /// Draw order; higher values paint on top.
    pub z: i32,
}

/// One primitive draw command in viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Open polyline through `points`.
    Polyline {
        points: Vec<Vector2<f64>>,
        style: Style,
    },
    /// Straight segment from `a` to `b`.
    Segment {
        a: Vector2<f64>,
        b: Vector2<f64>,
        style: Style,
    },
    /// Filled circular marker centered at `at`.
    Marker {
        at: Vector2<f64>,
        radius: f64,
        fill: Color,
        style: Style,
    },
}

impl DrawCmd {
    /// Z-order of the command.
    pub fn z(&self) -> i32 {
        match self {
            DrawCmd::Polyline { style, .. }
            | DrawCmd::Segment { style, .. }
            | DrawCmd::Marker { style, .. } => style.z,
        }
    }
}

/// A renderable diagram: title, square viewport, and z-ordered commands.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub title: String,
    /// Half-extent of the square viewport centered at the origin.
    pub half_extent: f64,
    pub cmds: Vec<DrawCmd>,
}

impl Scene {
    /// A blank scene: title and viewport only (empty-path case).
    pub fn blank(title: impl Into<String>, half_extent: f64) -> Self {
        Self {
            title: title.into(),
            half_extent,
            cmds: Vec::new(),
        }
    }
}
