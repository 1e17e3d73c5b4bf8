use rand::rngs::SmallRng;
use web_sys::Document;

use crate::component::Component;
use crate::consts::CURSOR_IDLE;
use crate::doc::{PointList, WorkspaceDocument};
use crate::error::EngineError;
use crate::grid::GridConfig;
use crate::input::{ComponentId, InputBus, UiEvent};
use crate::persist::{PersistError, PersistenceGateway};
use crate::polygon::PolygonFactory;
use crate::render::DomLayers;
use crate::scene::{Command, Scene};
use crate::toolbar::Toolbar;
use crate::tray::ShapeTray;
use crate::viewport::ViewportController;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions produced by components and returned from input handlers.
///
/// `RunCommand` and `ShapePlaced` are consumed inside [`EngineCore`]; the host
/// only ever sees the others.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the layers in this scene.
    Redraw(Scene),
    /// Start delivering window-level pointer move/up events.
    AttachGlobalPointer,
    /// Stop delivering window-level pointer move/up events.
    DetachGlobalPointer,
    /// Set the workspace cursor.
    SetCursor(&'static str),
    /// Put this payload on the active drag's data transfer.
    SetDragData(String),
    /// A toolbar command to execute.
    RunCommand(Command),
    /// The workspace accepted a drop carrying `payload`.
    ShapePlaced { payload: PointList },
}

/// Application root: all logic that does not depend on the DOM.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub toolbar: Toolbar,
    pub tray: ShapeTray,
    pub viewport: ViewportController,
    pub bus: InputBus,
    gateway: Box<dyn PersistenceGateway>,
    rng: SmallRng,
}

impl EngineCore {
    #[must_use]
    pub fn new(gateway: Box<dyn PersistenceGateway>, rng: SmallRng) -> Self {
        Self {
            toolbar: Toolbar,
            tray: ShapeTray::new(PolygonFactory::default()),
            viewport: ViewportController::new(GridConfig::default()),
            bus: InputBus::new(),
            gateway,
            rng,
        }
    }

    /// Restore the persisted document and return the full initial scene.
    ///
    /// An empty buffer after restoring gets one Create batch.
    pub fn mount(&mut self) -> Scene {
        let doc = self.gateway.load();
        log::info!("restored {} buffered and {} placed shapes", doc.buffer.len(), doc.workspace.len());
        self.tray.restore(doc.buffer);
        self.viewport.restore(doc.workspace);
        if self.tray.is_empty() {
            let added = self.tray.fill(&mut self.rng);
            log::debug!("seeded empty buffer with {added} shapes");
        }

        let mut scene = self.toolbar.mount();
        scene.merge(self.tray.mount());
        scene.merge(self.viewport.mount());
        scene
    }

    /// Route one event and return the actions for the host.
    ///
    /// All redraws caused by the event are merged into a single leading
    /// [`Action::Redraw`].
    pub fn dispatch(&mut self, event: &UiEvent) -> Vec<Action> {
        let had_subscribers = !self.bus.is_empty();

        let targets = match event {
            UiEvent::PointerMove { .. } | UiEvent::PointerUp => self.bus.subscribers().to_vec(),
            _ => vec![ComponentId::Toolbar, ComponentId::Tray, ComponentId::Viewport],
        };
        let mut raw = Vec::new();
        for id in targets {
            raw.extend(self.route(id, event));
        }

        let mut actions = self.resolve(raw);
        match (had_subscribers, self.bus.is_empty()) {
            (false, false) => actions.push(Action::AttachGlobalPointer),
            (true, true) => actions.push(Action::DetachGlobalPointer),
            _ => {}
        }
        actions
    }

    fn route(&mut self, id: ComponentId, event: &UiEvent) -> Vec<Action> {
        match id {
            ComponentId::Toolbar => self.toolbar.handle_event(event, &mut self.bus),
            ComponentId::Tray => self.tray.handle_event(event, &mut self.bus),
            ComponentId::Viewport => self.viewport.handle_event(event, &mut self.bus),
        }
    }

    /// Consume internal actions and fold every redraw into one scene.
    fn resolve(&mut self, raw: Vec<Action>) -> Vec<Action> {
        let mut scene = Scene::new();
        let mut out = Vec::new();
        for action in raw {
            match action {
                Action::Redraw(s) => scene.merge(s),
                Action::RunCommand(command) => scene.merge(self.run(command)),
                Action::ShapePlaced { payload } => {
                    if self.tray.take_drag_source(&payload).is_some() {
                        scene.merge(self.tray.buffer_scene());
                    }
                }
                other => out.push(other),
            }
        }
        if !scene.is_empty() {
            out.insert(0, Action::Redraw(scene));
        }
        out
    }

    // --- Commands ---

    /// Execute a toolbar command and return what needs redrawing.
    pub fn run(&mut self, command: Command) -> Scene {
        match command {
            Command::Create => self.create(),
            Command::Save => {
                if let Err(err) = self.save() {
                    log::error!("save failed: {err}");
                }
                Scene::new()
            }
            Command::Clear => self.clear(),
        }
    }

    /// Add a random batch to the buffer, never exceeding its capacity.
    pub fn create(&mut self) -> Scene {
        let added = self.tray.fill(&mut self.rng);
        log::debug!("created {added} shapes, buffer now {}", self.tray.len());
        self.tray.buffer_scene()
    }

    /// Persist the current buffer and workspace.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the gateway rejects the snapshot.
    pub fn save(&self) -> Result<(), PersistError> {
        let doc = self.snapshot();
        self.gateway.save(&doc)?;
        log::info!("saved {} buffered and {} placed shapes", doc.buffer.len(), doc.workspace.len());
        Ok(())
    }

    /// Delete the persisted document and every shape on screen.
    pub fn clear(&mut self) -> Scene {
        if let Err(err) = self.gateway.clear() {
            log::error!("clearing persisted document failed: {err}");
        }
        self.tray.clear();
        self.viewport.clear();
        let mut scene = self.tray.buffer_scene();
        scene.merge(self.viewport.shapes_scene());
        scene
    }

    // --- Queries ---

    #[must_use]
    pub fn snapshot(&self) -> WorkspaceDocument {
        WorkspaceDocument { buffer: self.tray.snapshot(), workspace: self.viewport.snapshot() }
    }

    /// Read the persisted document without touching on-screen state.
    #[must_use]
    pub fn load(&self) -> WorkspaceDocument {
        self.gateway.load()
    }
}

/// The full engine. Wraps `EngineCore` and owns the page's layer elements.
pub struct Engine {
    layers: DomLayers,
    pub core: EngineCore,
}

impl Engine {
    /// Bind to the page's layer elements.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a required element is missing or has the wrong type.
    pub fn new(document: &Document, gateway: Box<dyn PersistenceGateway>, rng: SmallRng) -> Result<Self, EngineError> {
        let layers = DomLayers::locate(document)?;
        Ok(Self { layers, core: EngineCore::new(gateway, rng) })
    }

    #[must_use]
    pub fn layers(&self) -> &DomLayers {
        &self.layers
    }

    /// Restore state and draw every layer.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a DOM call fails.
    pub fn mount(&mut self) -> Result<(), EngineError> {
        let scene = self.core.mount();
        self.layers.apply(&scene)?;
        self.layers.set_cursor(CURSOR_IDLE)
    }

    /// Route one event, apply redraws and cursor changes, and return what is
    /// left for the host (listener attachment, drag data).
    ///
    /// A failed DOM update is logged; the host actions are returned regardless.
    pub fn dispatch(&mut self, event: &UiEvent) -> Vec<Action> {
        let actions = self.core.dispatch(event);
        let layers = &self.layers;
        settle(actions, |action| match action {
            Action::Redraw(scene) => layers.apply(scene),
            Action::SetCursor(cursor) => layers.set_cursor(cursor),
            _ => Ok(()),
        })
    }
}

/// Run `apply` on every DOM action and return the remaining host actions in
/// order. Failures are logged; later actions still run.
fn settle(actions: Vec<Action>, mut apply: impl FnMut(&Action) -> Result<(), EngineError>) -> Vec<Action> {
    let mut rest = Vec::new();
    for action in actions {
        match action {
            Action::Redraw(_) | Action::SetCursor(_) => {
                if let Err(err) = apply(&action) {
                    log::error!("DOM update failed: {err}");
                }
            }
            other => rest.push(other),
        }
    }
    rest
}
