//! Workspace viewport: pan/zoom state, the grid overlay, and placed shapes.
//!
//! The controller is the only owner of the [`Camera`]. Every handler that
//! changes it returns a redraw carrying the grid layer, the ruler layer and the
//! shape-layer transform together, so the host applies all three within the
//! same event callback.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::camera::{Camera, Point, ZoomDirection};
use crate::component::Component;
use crate::consts::{CURSOR_IDLE, CURSOR_PANNING};
use crate::doc::{PointList, Polygon};
use crate::engine::Action;
use crate::grid::{self, GridConfig};
use crate::input::{Button, ComponentId, InputBus, InputState, PointerTarget, UiEvent};
use crate::scene::{Layer, Primitive, Scene};

/// Pan/zoom controller and owner of the workspace shape collection.
#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    camera: Camera,
    input: InputState,
    grid: GridConfig,
    shapes: Vec<Polygon>,
}

impl ViewportController {
    #[must_use]
    pub fn new(grid: GridConfig) -> Self {
        Self { grid, ..Self::default() }
    }

    // --- Queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn input_state(&self) -> InputState {
        self.input
    }

    /// Placed shapes in render order.
    #[must_use]
    pub fn shapes(&self) -> &[Polygon] {
        &self.shapes
    }

    /// Point lists of the placed shapes, for persistence.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PointList> {
        self.shapes.iter().map(|s| s.points.clone()).collect()
    }

    // --- Collection ---

    /// Replace the workspace contents with previously persisted shapes.
    pub fn restore(&mut self, shapes: Vec<PointList>) {
        self.shapes = shapes.into_iter().map(Polygon::new).collect();
    }

    /// Remove every placed shape. The camera is kept.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Place `points` so that its local origin lands under the screen point
    /// `at`, and return the placed polygon.
    pub fn place(&mut self, points: &PointList, at: Point) -> &Polygon {
        let logical = self.camera.screen_to_world(at);
        self.shapes.push(Polygon::new(points.translated(logical)));
        &self.shapes[self.shapes.len() - 1]
    }

    // --- Scenes ---

    /// Grid, ruler and shape-layer transform for the current camera.
    #[must_use]
    pub fn overlay_scene(&self) -> Scene {
        let mut scene = Scene::new()
            .with_layer(Layer::Grid, grid::grid_lines(&self.camera, &self.grid))
            .with_layer(Layer::Scale, grid::ruler_labels(&self.camera, &self.grid));
        scene.set_shape_transform(self.camera.layer_transform());
        scene
    }

    /// The shape layer contents (in logical coordinates).
    #[must_use]
    pub fn shapes_scene(&self) -> Scene {
        let shapes = self
            .shapes
            .iter()
            .map(|s| Primitive::Polygon { points: s.points.clone(), fill: s.fill.clone() })
            .collect();
        Scene::new().with_layer(Layer::Shapes, shapes)
    }

    // --- Handlers ---

    fn on_pointer_down(&mut self, target: PointerTarget, button: Button, bus: &mut InputBus) -> Vec<Action> {
        let starts_pan = target == PointerTarget::Background && button != Button::Secondary;
        if !starts_pan || self.input == InputState::Panning {
            return Vec::new();
        }
        self.input = InputState::Panning;
        bus.subscribe(self.id());
        vec![Action::SetCursor(CURSOR_PANNING)]
    }

    fn on_pointer_up(&mut self, bus: &mut InputBus) -> Vec<Action> {
        if self.input != InputState::Panning {
            return Vec::new();
        }
        self.input = InputState::Idle;
        bus.unsubscribe(self.id());
        vec![Action::SetCursor(CURSOR_IDLE)]
    }

    fn on_wheel(&mut self, delta_y: f64) -> Vec<Action> {
        let direction = if delta_y < 0.0 {
            ZoomDirection::In
        } else if delta_y > 0.0 {
            ZoomDirection::Out
        } else {
            return Vec::new();
        };
        if !self.camera.zoom_by(direction.factor()) {
            log::warn!("zoom step rejected at zoom {}", self.camera.zoom);
            return Vec::new();
        }
        vec![Action::Redraw(self.overlay_scene())]
    }

    fn on_drop(&mut self, at: Point, payload: Option<&str>) -> Vec<Action> {
        let Some(raw) = payload else {
            log::debug!("drop without payload ignored");
            return Vec::new();
        };
        let points = match raw.parse::<PointList>() {
            Ok(points) => points,
            Err(err) => {
                log::debug!("drop payload rejected: {err}");
                return Vec::new();
            }
        };
        if !at.is_finite() {
            log::debug!("drop at non-finite position ignored");
            return Vec::new();
        }
        let placed = self.place(&points, at);
        log::info!("placed {}-gon at {}", placed.points.len(), placed.points);
        vec![Action::Redraw(self.shapes_scene()), Action::ShapePlaced { payload: points }]
    }
}

impl Component for ViewportController {
    fn id(&self) -> ComponentId {
        ComponentId::Viewport
    }

    fn render(&self, scene: &mut Scene) {
        scene.merge(self.overlay_scene());
        scene.merge(self.shapes_scene());
    }

    fn handle_event(&mut self, event: &UiEvent, bus: &mut InputBus) -> Vec<Action> {
        match event {
            UiEvent::PointerDown { target, button } => self.on_pointer_down(*target, *button, bus),
            UiEvent::PointerMove { delta } => {
                if self.input != InputState::Panning {
                    return Vec::new();
                }
                self.camera.pan_by(*delta);
                vec![Action::Redraw(self.overlay_scene())]
            }
            UiEvent::PointerUp => self.on_pointer_up(bus),
            UiEvent::Wheel { delta_y } => self.on_wheel(*delta_y),
            UiEvent::Drop { at, payload } => self.on_drop(*at, payload.as_deref()),
            UiEvent::DragStart { .. } | UiEvent::DragEnd | UiEvent::Command(_) => Vec::new(),
        }
    }
}
