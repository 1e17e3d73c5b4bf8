//! Rendering: applies scenes to the page's layer elements.
//!
//! This module is the only place that creates or removes DOM nodes. It reads
//! [`Scene`]s and never mutates application state. Every layer present in a
//! scene is emptied and rebuilt; text goes through `textContent`, attributes
//! through `setAttribute`, so no markup is ever parsed.
//!
//! All fallible DOM calls propagate errors via `Result<(), EngineError>`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, SvgsvgElement, SvggElement};

use crate::camera::LayerTransform;
use crate::consts::THUMBNAIL_VIEWBOX;
use crate::doc::PointList;
use crate::error::EngineError;
use crate::scene::{Layer, Primitive, Scene};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Element ids the page shell must provide.
pub const CONTROLS_ID: &str = "controls";
pub const BUFFER_ID: &str = "buffer";
pub const WORKSPACE_ID: &str = "svg-root";
pub const GRID_ID: &str = "grid";
pub const SCALE_ID: &str = "scale";
pub const SHAPES_ID: &str = "viewport";

/// Handles to every layer element on the page.
pub struct DomLayers {
    document: Document,
    controls: HtmlElement,
    buffer: HtmlElement,
    workspace: SvgsvgElement,
    grid: SvggElement,
    scale: SvggElement,
    shapes: SvggElement,
}

impl DomLayers {
    /// Find and type-check the layer elements.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an element is missing or is not of the expected type.
    pub fn locate(document: &Document) -> Result<Self, EngineError> {
        Ok(Self {
            document: document.clone(),
            controls: lookup(document, CONTROLS_ID, "HTML element")?,
            buffer: lookup(document, BUFFER_ID, "HTML element")?,
            workspace: lookup(document, WORKSPACE_ID, "<svg> element")?,
            grid: lookup(document, GRID_ID, "<g> element")?,
            scale: lookup(document, SCALE_ID, "<g> element")?,
            shapes: lookup(document, SHAPES_ID, "<g> element")?,
        })
    }

    #[must_use]
    pub fn workspace(&self) -> &SvgsvgElement {
        &self.workspace
    }

    #[must_use]
    pub fn buffer(&self) -> &HtmlElement {
        &self.buffer
    }

    #[must_use]
    pub fn controls(&self) -> &HtmlElement {
        &self.controls
    }

    /// Rebuild every layer in `scene` and apply its shape transform.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any DOM call fails.
    pub fn apply(&self, scene: &Scene) -> Result<(), EngineError> {
        for (layer, primitives) in scene.layers() {
            let parent = self.layer_element(layer);
            clear_children(parent)?;
            for primitive in primitives {
                let node = self.build(primitive)?;
                parent.append_child(&node)?;
            }
        }
        if let Some(transform) = scene.shape_transform() {
            self.apply_transform(transform)?;
        }
        Ok(())
    }

    /// Set the workspace cursor.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the style cannot be written.
    pub fn set_cursor(&self, cursor: &str) -> Result<(), EngineError> {
        self.workspace.style().set_property("cursor", cursor)?;
        Ok(())
    }

    fn apply_transform(&self, transform: LayerTransform) -> Result<(), EngineError> {
        self.shapes.set_attribute("transform", &transform.to_string())?;
        Ok(())
    }

    fn layer_element(&self, layer: Layer) -> &Element {
        match layer {
            Layer::Controls => &self.controls,
            Layer::Buffer => &self.buffer,
            Layer::Grid => &self.grid,
            Layer::Scale => &self.scale,
            Layer::Shapes => &self.shapes,
        }
    }

    // =============================================================
    // Primitive builders
    // =============================================================

    fn build(&self, primitive: &Primitive) -> Result<Element, EngineError> {
        let element = match primitive {
            Primitive::Line { .. } => self.svg("line")?,
            Primitive::Label { .. } => self.svg("text")?,
            Primitive::Polygon { .. } => self.svg("polygon")?,
            Primitive::Thumbnail { .. } => self.document.create_element("div")?,
            Primitive::Button { .. } => self.document.create_element("button")?,
        };
        set_attrs(&element, &attributes(primitive))?;
        match primitive {
            Primitive::Label { text, .. } => element.set_text_content(Some(text.as_str())),
            Primitive::Button { command } => element.set_text_content(Some(command.label())),
            Primitive::Thumbnail { points, fill, .. } => {
                let view = self.thumbnail_view(points, fill)?;
                element.append_child(&view)?;
            }
            Primitive::Line { .. } | Primitive::Polygon { .. } => {}
        }
        Ok(element)
    }

    /// The `<svg>` inside a buffer tile, holding one polygon.
    fn thumbnail_view(&self, points: &PointList, fill: &str) -> Result<Element, EngineError> {
        let view = self.svg("svg")?;
        set_attrs(&view, &[thumbnail_viewbox()])?;
        let polygon = self.svg("polygon")?;
        set_attrs(&polygon, &polygon_attrs(points, fill))?;
        view.append_child(&polygon)?;
        Ok(view)
    }

    fn svg(&self, tag: &str) -> Result<Element, EngineError> {
        Ok(self.document.create_element_ns(Some(SVG_NS), tag)?)
    }
}

fn lookup<T: JsCast>(document: &Document, id: &'static str, expected: &'static str) -> Result<T, EngineError> {
    let element = document
        .get_element_by_id(id)
        .ok_or(EngineError::MissingElement(id))?;
    element
        .dyn_into::<T>()
        .map_err(|_| EngineError::WrongElementType { id, expected })
}

// =============================================================
// Attributes
// =============================================================

/// Attributes written on the element built for `primitive`.
pub(crate) fn attributes(primitive: &Primitive) -> Vec<(&'static str, String)> {
    match primitive {
        Primitive::Line { x1, y1, x2, y2 } => vec![
            ("x1", x1.to_string()),
            ("y1", y1.to_string()),
            ("x2", x2.to_string()),
            ("y2", y2.to_string()),
        ],
        Primitive::Label { x, y, .. } => {
            vec![("x", x.to_string()), ("y", y.to_string()), ("class", "scale-text".to_string())]
        }
        Primitive::Polygon { points, fill } => polygon_attrs(points, fill),
        Primitive::Thumbnail { index, .. } => vec![
            ("class", "thumb".to_string()),
            ("draggable", "true".to_string()),
            ("data-index", index.to_string()),
        ],
        Primitive::Button { command } => {
            vec![("type", "button".to_string()), ("data-command", command.as_str().to_string())]
        }
    }
}

fn polygon_attrs(points: &PointList, fill: &str) -> Vec<(&'static str, String)> {
    vec![("points", points.to_string()), ("fill", fill.to_string())]
}

fn thumbnail_viewbox() -> (&'static str, String) {
    ("viewBox", format!("0 0 {THUMBNAIL_VIEWBOX} {THUMBNAIL_VIEWBOX}"))
}

fn set_attrs(element: &Element, attrs: &[(&str, String)]) -> Result<(), EngineError> {
    for (name, value) in attrs {
        element.set_attribute(name, value)?;
    }
    Ok(())
}

fn clear_children(parent: &Node) -> Result<(), EngineError> {
    while let Some(child) = parent.first_child() {
        parent.remove_child(&child)?;
    }
    Ok(())
}
