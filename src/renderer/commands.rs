//! Draw command types for 2D rendering
//!
//! A frame is an ordered list of these; any backend that can fill
//! rectangles, circles and polygons and draw text can present it.

use glam::Vec2;
use serde::Serialize;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b, 255)
    }
}

/// Text size class; the backend maps these to concrete fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    Normal,
    Large,
}

/// Which point of the rendered text `(x, y)` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopLeft,
    Center,
}

/// A single draw primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Filled rectangle, optionally with rounded corners
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgba,
        radius: f32,
    },
    /// Filled circle
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgba,
    },
    /// Filled polygon
    Polygon { points: Vec<Vec2>, color: Rgba },
    /// Text at a position
    Text {
        text: String,
        x: f32,
        y: f32,
        size: TextSize,
        anchor: Anchor,
        color: Rgba,
    },
}

impl DrawCommand {
    pub fn rect(x: f32, y: f32, w: f32, h: f32, color: Rgba) -> Self {
        Self::Rect {
            x,
            y,
            w,
            h,
            color,
            radius: 0.0,
        }
    }

    pub fn rounded_rect(x: f32, y: f32, w: f32, h: f32, radius: f32, color: Rgba) -> Self {
        Self::Rect {
            x,
            y,
            w,
            h,
            color,
            radius,
        }
    }

    pub fn circle(x: f32, y: f32, radius: f32, color: Rgba) -> Self {
        Self::Circle {
            x,
            y,
            radius,
            color,
        }
    }

    pub fn text(text: impl Into<String>, x: f32, y: f32, size: TextSize, anchor: Anchor) -> Self {
        Self::Text {
            text: text.into(),
            x,
            y,
            size,
            anchor,
            color: colors::TEXT,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const BACKGROUND: Rgba = Rgba::rgb(255, 255, 255);
    pub const DINO: Rgba = Rgba::rgb(30, 144, 255);
    pub const EYE: Rgba = Rgba::rgb(255, 255, 255);
    pub const PUPIL: Rgba = Rgba::rgb(0, 0, 0);
    pub const OBSTACLE: Rgba = Rgba::rgb(120, 120, 120);
    pub const GROUND: Rgba = Rgba::rgb(100, 100, 100);
    pub const GROUND_TICK: Rgba = Rgba::rgb(0, 0, 0);
    pub const TEXT: Rgba = Rgba::rgb(0, 0, 0);
}
