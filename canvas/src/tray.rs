//! Buffer tray: staging area for shapes that have not been placed yet.
//!
//! The tray is also the drag source. A drag records the source index; once the
//! workspace accepts the drop, the engine asks the tray to give that shape up.

#[cfg(test)]
#[path = "tray_test.rs"]
mod tray_test;

use rand::Rng;

use crate::component::Component;
use crate::consts::{BUFFER_CAPACITY, CREATE_BATCH_MAX, CREATE_BATCH_MIN};
use crate::doc::{PointList, Polygon};
use crate::engine::Action;
use crate::input::{ComponentId, InputBus, UiEvent};
use crate::polygon::PolygonFactory;
use crate::scene::{Layer, Primitive, Scene};

#[derive(Debug, Clone, Default)]
pub struct ShapeTray {
    shapes: Vec<Polygon>,
    factory: PolygonFactory,
    drag_source: Option<usize>,
}

impl ShapeTray {
    #[must_use]
    pub fn new(factory: PolygonFactory) -> Self {
        Self { factory, ..Self::default() }
    }

    #[must_use]
    pub fn shapes(&self) -> &[Polygon] {
        &self.shapes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Index of the thumbnail currently being dragged.
    #[must_use]
    pub fn drag_source(&self) -> Option<usize> {
        self.drag_source
    }

    /// Add a random batch of polygons without exceeding [`BUFFER_CAPACITY`].
    /// Returns how many were added.
    pub fn fill<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let room = BUFFER_CAPACITY.saturating_sub(self.shapes.len());
        let batch = rng.random_range(CREATE_BATCH_MIN..=CREATE_BATCH_MAX).min(room);
        for _ in 0..batch {
            let points = self.factory.generate(rng);
            self.shapes.push(Polygon::new(points));
        }
        batch
    }

    /// Replace the tray contents with persisted shapes, truncated to capacity.
    pub fn restore(&mut self, shapes: Vec<PointList>) {
        if shapes.len() > BUFFER_CAPACITY {
            log::warn!("persisted buffer holds {} shapes, keeping {BUFFER_CAPACITY}", shapes.len());
        }
        self.shapes = shapes.into_iter().take(BUFFER_CAPACITY).map(Polygon::new).collect();
        self.drag_source = None;
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.drag_source = None;
    }

    /// Point lists of the buffered shapes, for persistence.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PointList> {
        self.shapes.iter().map(|s| s.points.clone()).collect()
    }

    /// Record `index` as the drag source and return its transfer payload.
    pub fn begin_drag(&mut self, index: usize) -> Option<String> {
        let shape = self.shapes.get(index)?;
        self.drag_source = Some(index);
        Some(shape.points.to_string())
    }

    /// Remove and return the drag source if it still holds `points`.
    pub fn take_drag_source(&mut self, points: &PointList) -> Option<Polygon> {
        let index = self.drag_source.take()?;
        if self.shapes.get(index).is_some_and(|s| s.points == *points) {
            Some(self.shapes.remove(index))
        } else {
            None
        }
    }

    /// The buffer layer contents.
    #[must_use]
    pub fn buffer_scene(&self) -> Scene {
        let thumbnails = self
            .shapes
            .iter()
            .enumerate()
            .map(|(index, s)| Primitive::Thumbnail { index, points: s.points.clone(), fill: s.fill.clone() })
            .collect();
        Scene::new().with_layer(Layer::Buffer, thumbnails)
    }
}

impl Component for ShapeTray {
    fn id(&self) -> ComponentId {
        ComponentId::Tray
    }

    fn render(&self, scene: &mut Scene) {
        scene.merge(self.buffer_scene());
    }

    fn handle_event(&mut self, event: &UiEvent, _bus: &mut InputBus) -> Vec<Action> {
        match event {
            UiEvent::DragStart { index } => self.begin_drag(*index).map_or_else(
                || {
                    log::debug!("drag from unknown buffer index {index}");
                    Vec::new()
                },
                |payload| vec![Action::SetDragData(payload)],
            ),
            UiEvent::DragEnd => {
                self.drag_source = None;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}
