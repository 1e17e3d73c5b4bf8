//! Pan/zoom transform state and the screen <-> workspace coordinate mapping.
//!
//! Screen space is CSS pixels relative to the workspace origin. Workspace
//! (logical) space is the unscaled, unpanned frame the shapes are stored in.
//! The forward mapping is `screen = logical * zoom + offset`; the inverse is
//! `logical = (screen - offset) / zoom`.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::fmt;

use crate::consts::{INITIAL_ZOOM, ZOOM_STEP};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    #[must_use]
    pub fn offset_by(self, other: Point) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }

    /// Both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Incremental pointer movement as reported by the device, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Direction of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Multiplicative factor for one step in this direction.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::In => ZOOM_STEP,
            Self::Out => 1.0 / ZOOM_STEP,
        }
    }
}

/// Camera state for pan/zoom on the workspace.
///
/// `offset_x` / `offset_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom) and is always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: INITIAL_ZOOM, offset_x: 0.0, offset_y: 0.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.zoom,
            y: (screen.y - self.offset_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.offset_x,
            y: world.y * self.zoom + self.offset_y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Shift the pan offset by a device delta.
    pub fn pan_by(&mut self, delta: Delta) {
        self.offset_x += delta.dx;
        self.offset_y += delta.dy;
    }

    /// Multiply the zoom by `factor`.
    ///
    /// Returns `false` and leaves the camera untouched when the result would
    /// not be a finite, normal, positive number.
    pub fn zoom_by(&mut self, factor: f64) -> bool {
        let next = self.zoom * factor;
        if !next.is_normal() || next <= 0.0 {
            return false;
        }
        self.zoom = next;
        true
    }

    /// Transform for the rendered shape layer.
    #[must_use]
    pub fn layer_transform(&self) -> LayerTransform {
        LayerTransform {
            scale: self.zoom,
            translate_x: self.offset_x / self.zoom,
            translate_y: self.offset_y / self.zoom,
        }
    }
}

/// `scale(s) translate(tx, ty)` as applied to the shape layer.
///
/// The translate is in pre-scale units, so the composite maps a logical point
/// `p` to `s * (p + t)`, which equals [`Camera::world_to_screen`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl LayerTransform {
    /// Apply the composite transform to a logical point.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.scale * (p.x + self.translate_x),
            y: self.scale * (p.y + self.translate_y),
        }
    }
}

impl fmt::Display for LayerTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scale({}) translate({}, {})", self.scale, self.translate_x, self.translate_y)
    }
}
