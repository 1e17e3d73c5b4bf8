//! Random polygon generation for the buffer tray.
//!
//! Shapes are regular polygons: a random center, radius and side count, with
//! vertices evenly spaced by `2π / sides` around the center. The RNG is
//! injected so callers choose the seeding (page entropy in the browser, a fixed
//! seed in tests).

#[cfg(test)]
#[path = "polygon_test.rs"]
mod polygon_test;

use std::f64::consts::TAU;
use std::ops::{Range, RangeInclusive};

use rand::Rng;

use crate::camera::Point;
use crate::consts::{MAX_SIDES, MIN_SIDES};
use crate::doc::PointList;

/// Sampling ranges for generated polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonBounds {
    /// Range for both center coordinates.
    pub center: Range<f64>,
    pub radius: Range<f64>,
    pub sides: RangeInclusive<usize>,
}

impl Default for PolygonBounds {
    fn default() -> Self {
        Self { center: 50.0..150.0, radius: 20.0..50.0, sides: MIN_SIDES..=MAX_SIDES }
    }
}

/// Generates random regular polygons within a set of bounds.
#[derive(Debug, Clone, Default)]
pub struct PolygonFactory {
    bounds: PolygonBounds,
}

impl PolygonFactory {
    /// Factory with custom bounds. A side range starting below three is raised
    /// to three.
    #[must_use]
    pub fn new(bounds: PolygonBounds) -> Self {
        let lo = (*bounds.sides.start()).max(MIN_SIDES);
        let hi = (*bounds.sides.end()).max(lo);
        Self { bounds: PolygonBounds { sides: lo..=hi, ..bounds } }
    }

    #[must_use]
    pub fn bounds(&self) -> &PolygonBounds {
        &self.bounds
    }

    /// Generate one polygon.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> PointList {
        let center = Point::new(sample(rng, &self.bounds.center), sample(rng, &self.bounds.center));
        let radius = sample(rng, &self.bounds.radius);
        let sides = rng.random_range(self.bounds.sides.clone());
        regular_polygon(center, radius, sides)
    }
}

/// Vertices of a regular polygon, the first one at angle zero.
#[must_use]
pub fn regular_polygon(center: Point, radius: f64, sides: usize) -> PointList {
    #[allow(clippy::cast_precision_loss)]
    let step = TAU / sides as f64;
    let points = (0..sides)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = i as f64 * step;
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect();
    PointList::new(points)
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
    if range.is_empty() {
        return range.start;
    }
    rng.random_range(range.clone())
}
