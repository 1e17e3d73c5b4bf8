//! Grid and ruler overlay for the workspace.
//!
//! Both functions are pure in the camera: identical input yields identical
//! primitives, and the whole overlay is rebuilt on every pan or zoom.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::camera::{Camera, Point};
use crate::consts::{GRID_EXTENT, GRID_SPACING, RULER_INSET_PX};
use crate::scene::Primitive;

/// Upper bound on lines per axis, so a tiny spacing cannot flood the overlay.
const MAX_LINES_PER_AXIS: f64 = 10_000.0;

/// Logical spacing and extent of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    spacing: f64,
    extent: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { spacing: GRID_SPACING, extent: GRID_EXTENT }
    }
}

impl GridConfig {
    /// Returns `None` unless `spacing` is finite and positive, `extent` is
    /// finite and non-negative, and the pair yields a bounded line count.
    #[must_use]
    pub fn new(spacing: f64, extent: f64) -> Option<Self> {
        let valid = spacing.is_finite()
            && spacing > 0.0
            && extent.is_finite()
            && extent >= 0.0
            && extent / spacing <= MAX_LINES_PER_AXIS;
        valid.then_some(Self { spacing, extent })
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    #[must_use]
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Logical positions of the grid lines: `0, spacing, 2*spacing, ..` up to
    /// and including `extent`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn positions(&self) -> impl Iterator<Item = f64> + use<> {
        let Self { spacing, extent } = *self;
        // Tolerate accumulated error so `extent` itself is included.
        let count = (extent / spacing + 1e-9).floor() as u64;
        (0..=count).map(move |i| i as f64 * spacing)
    }
}

/// Vertical then horizontal grid lines in screen space.
#[must_use]
pub fn grid_lines(camera: &Camera, config: &GridConfig) -> Vec<Primitive> {
    let near = camera.world_to_screen(Point::new(0.0, 0.0));
    let far = camera.world_to_screen(Point::new(config.extent, config.extent));

    let vertical = config.positions().map(|pos| {
        let x = pos * camera.zoom + camera.offset_x;
        Primitive::Line { x1: x, y1: near.y, x2: x, y2: far.y }
    });
    let horizontal = config.positions().map(|pos| {
        let y = pos * camera.zoom + camera.offset_y;
        Primitive::Line { x1: near.x, y1: y, x2: far.x, y2: y }
    });
    vertical.chain(horizontal).collect()
}

/// Ruler labels along the top and left edges, aligned with the grid lines.
#[must_use]
pub fn ruler_labels(camera: &Camera, config: &GridConfig) -> Vec<Primitive> {
    let top = config.positions().map(|pos| Primitive::Label {
        x: pos * camera.zoom + camera.offset_x,
        y: RULER_INSET_PX,
        text: label_text(pos),
    });
    let left = config.positions().map(|pos| Primitive::Label {
        x: 0.0,
        y: pos * camera.zoom + camera.offset_y,
        text: label_text(pos),
    });
    top.chain(left).collect()
}

fn label_text(pos: f64) -> String {
    format!("{pos:.0}")
}
