//! Declarative scene description consumed by the rendering back end.
//!
//! Components never build markup. They describe what a layer contains as a
//! list of [`Primitive`]s; the back end ([`crate::render`]) replaces every layer
//! present in a [`Scene`] wholesale. Layers absent from a scene are left as they
//! are on screen.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::camera::LayerTransform;
use crate::doc::PointList;

/// A drawing surface. Workspace layers are listed back-to-front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// Command buttons.
    Controls,
    /// Buffer tray thumbnails.
    Buffer,
    /// Workspace grid lines.
    Grid,
    /// Workspace ruler labels.
    Scale,
    /// Placed workspace shapes.
    Shapes,
}

/// A user command issued from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Create,
    Save,
    Clear,
}

impl Command {
    /// Every command in toolbar order.
    pub const ALL: [Self; 3] = [Self::Create, Self::Save, Self::Clear];

    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Save => "Save",
            Self::Clear => "Clear",
        }
    }

    /// Stable identifier used in `data-command` attributes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Save => "save",
            Self::Clear => "clear",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown `data-command` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command `{0}`")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// One drawable element.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Straight line in screen space.
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Text anchored at a screen-space point.
    Label { x: f64, y: f64, text: String },
    /// Filled polygon in the coordinate space of its layer.
    Polygon { points: PointList, fill: String },
    /// Draggable buffer tile showing one polygon.
    Thumbnail { index: usize, points: PointList, fill: String },
    /// Toolbar button.
    Button { command: Command },
}

/// Layers to redraw plus an optional new transform for the shape layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    layers: BTreeMap<Layer, Vec<Primitive>>,
    shape_transform: Option<LayerTransform>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of `layer` in this scene.
    pub fn set_layer(&mut self, layer: Layer, primitives: Vec<Primitive>) {
        self.layers.insert(layer, primitives);
    }

    /// Builder form of [`Scene::set_layer`].
    #[must_use]
    pub fn with_layer(mut self, layer: Layer, primitives: Vec<Primitive>) -> Self {
        self.set_layer(layer, primitives);
        self
    }

    pub fn set_shape_transform(&mut self, transform: LayerTransform) {
        self.shape_transform = Some(transform);
    }

    /// Fold another scene into this one. Layers in `other` win.
    pub fn merge(&mut self, other: Scene) {
        self.layers.extend(other.layers);
        if other.shape_transform.is_some() {
            self.shape_transform = other.shape_transform;
        }
    }

    #[must_use]
    pub fn layer(&self, layer: Layer) -> Option<&[Primitive]> {
        self.layers.get(&layer).map(Vec::as_slice)
    }

    /// Layers in back-to-front order.
    pub fn layers(&self) -> impl Iterator<Item = (Layer, &[Primitive])> {
        self.layers.iter().map(|(l, p)| (*l, p.as_slice()))
    }

    #[must_use]
    pub fn shape_transform(&self) -> Option<LayerTransform> {
        self.shape_transform
    }

    /// Returns `true` if the scene would change nothing on screen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty() && self.shape_transform.is_none()
    }
}
