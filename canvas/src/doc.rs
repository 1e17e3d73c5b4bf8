//! Document model: polygons, point lists, and the persisted snapshot.
//!
//! A [`PointList`] is the ordered vertex sequence of one polygon. Its text form
//! (`"x1,y1 x2,y2 ..."`) is shared by the drag-transfer payload and the
//! persisted [`WorkspaceDocument`], so both go through [`PointList::from_str`]
//! and [`PointList`]'s `Display` impl.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::camera::Point;
use crate::consts::{MIN_SIDES, PLACEMENT_FILL};

/// Why a point-list string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointListError {
    #[error("point list is empty")]
    Empty,
    #[error("pair {index} `{pair}` is not of the form x,y")]
    MalformedPair { index: usize, pair: String },
    #[error("pair {index} `{pair}` has a non-numeric or non-finite coordinate")]
    BadCoordinate { index: usize, pair: String },
    #[error("polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),
}

/// Ordered vertices of a polygon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointList(pub Vec<Point>);

impl PointList {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this list with every vertex shifted by `by`.
    #[must_use]
    pub fn translated(&self, by: Point) -> Self {
        Self(self.0.iter().map(|p| p.offset_by(by)).collect())
    }
}

impl fmt::Display for PointList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{},{}", p.x, p.y)?;
        }
        Ok(())
    }
}

impl FromStr for PointList {
    type Err = PointListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut points = Vec::new();
        for (index, pair) in s.split_whitespace().enumerate() {
            let Some((x, y)) = pair.split_once(',') else {
                return Err(PointListError::MalformedPair { index, pair: pair.to_string() });
            };
            let bad = || PointListError::BadCoordinate { index, pair: pair.to_string() };
            let x: f64 = x.parse().map_err(|_| bad())?;
            let y: f64 = y.parse().map_err(|_| bad())?;
            let point = Point::new(x, y);
            if !point.is_finite() {
                return Err(bad());
            }
            points.push(point);
        }
        if points.is_empty() {
            return Err(PointListError::Empty);
        }
        if points.len() < MIN_SIDES {
            return Err(PointListError::TooFewPoints(points.len()));
        }
        Ok(Self(points))
    }
}

impl Serialize for PointList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PointList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A polygon on either the buffer tray or the workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: PointList,
    /// CSS fill color.
    pub fill: String,
}

impl Polygon {
    /// A polygon with the standard placement fill.
    #[must_use]
    pub fn new(points: PointList) -> Self {
        Self { points, fill: PLACEMENT_FILL.to_string() }
    }
}

/// Persisted snapshot of both shape collections, in render order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkspaceDocument {
    pub buffer: Vec<PointList>,
    pub workspace: Vec<PointList>,
}

impl WorkspaceDocument {
    /// Returns `true` if neither collection holds a shape.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty() && self.workspace.is_empty()
    }
}
