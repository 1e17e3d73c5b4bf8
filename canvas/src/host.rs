//! Browser host: wasm entry point and DOM event wiring.
//!
//! The host translates DOM events into [`UiEvent`]s, hands them to the
//! [`Engine`], and carries out the few actions the engine cannot apply itself:
//! attaching or detaching the window-level pointer listeners and filling in
//! drag data. Element listeners are registered once at startup and live as
//! long as the page.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, DataTransfer, DragEvent, Element, Event, EventTarget, MouseEvent, WheelEvent, Window};

use crate::camera::{Delta, Point};
use crate::consts::DRAG_MEDIA_TYPE;
use crate::engine::{Action, Engine};
use crate::error::EngineError;
use crate::input::{Button, PointerTarget, UiEvent};
use crate::persist::LocalStorageGateway;
use crate::scene::Command;

thread_local! {
    static HOST: RefCell<Option<Rc<Host>>> = const { RefCell::new(None) };
}

type Listener = Closure<dyn FnMut(Event)>;

/// Module entry point, run by wasm-bindgen once the module is instantiated.
///
/// # Errors
///
/// Returns `Err` if the page shell is missing a layer element or storage is
/// unavailable.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }

    let host = Host::boot().map_err(|err| {
        log::error!("startup failed: {err}");
        JsValue::from(err)
    })?;
    HOST.with(|slot| *slot.borrow_mut() = Some(host));
    log::info!("workspace ready");
    Ok(())
}

struct Host {
    window: Window,
    engine: RefCell<Engine>,
    global_move: Listener,
    global_up: Listener,
    global_attached: Cell<bool>,
    listeners: RefCell<Vec<Listener>>,
}

impl Host {
    fn boot() -> Result<Rc<Self>, EngineError> {
        let window = web_sys::window().ok_or(EngineError::NoWindow)?;
        let document = window.document().ok_or(EngineError::NoDocument)?;
        let gateway = LocalStorageGateway::from_window(&window)?;
        let mut engine = Engine::new(&document, Box::new(gateway), SmallRng::seed_from_u64(entropy_seed()))?;
        engine.mount()?;

        let host = Rc::new_cyclic(|weak: &Weak<Self>| Self {
            window,
            engine: RefCell::new(engine),
            global_move: listener(weak, on_global_move),
            global_up: listener(weak, on_global_up),
            global_attached: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
        });
        host.wire()?;
        Ok(host)
    }

    fn wire(self: &Rc<Self>) -> Result<(), EngineError> {
        let (workspace, buffer, controls) = {
            let engine = self.engine.borrow();
            let layers = engine.layers();
            (layers.workspace().clone(), layers.buffer().clone(), layers.controls().clone())
        };

        let active = AddEventListenerOptions::new();
        active.set_passive(false);

        self.listen(&workspace, "mousedown", None, on_mouse_down)?;
        self.listen(&workspace, "wheel", Some(&active), on_wheel)?;
        self.listen(&workspace, "dragover", None, on_drag_over)?;
        self.listen(&workspace, "drop", None, on_drop)?;
        self.listen(&buffer, "dragstart", None, on_drag_start)?;
        self.listen(&buffer, "dragend", None, on_drag_end)?;
        self.listen(&controls, "click", None, on_click)?;
        Ok(())
    }

    fn listen(
        self: &Rc<Self>,
        target: &EventTarget,
        kind: &str,
        options: Option<&AddEventListenerOptions>,
        handler: fn(&Host, &Event),
    ) -> Result<(), EngineError> {
        let closure = listener(&Rc::downgrade(self), handler);
        let callback = closure.as_ref().unchecked_ref();
        match options {
            Some(options) => {
                target.add_event_listener_with_callback_and_add_event_listener_options(kind, callback, options)?;
            }
            None => target.add_event_listener_with_callback(kind, callback)?,
        }
        self.listeners.borrow_mut().push(closure);
        Ok(())
    }

    /// Route one event through the engine and perform what comes back.
    fn dispatch(&self, event: &UiEvent, transfer: Option<&DataTransfer>) {
        let actions = self.engine.borrow_mut().dispatch(event);
        for action in actions {
            if let Err(err) = self.perform(action, transfer) {
                log::error!("host action failed: {err}");
            }
        }
    }

    fn perform(&self, action: Action, transfer: Option<&DataTransfer>) -> Result<(), EngineError> {
        match action {
            Action::AttachGlobalPointer => self.set_global_pointer(true),
            Action::DetachGlobalPointer => self.set_global_pointer(false),
            Action::SetDragData(payload) => {
                match transfer {
                    Some(transfer) => transfer.set_data(DRAG_MEDIA_TYPE, &payload)?,
                    None => log::warn!("drag payload without a data transfer"),
                }
                Ok(())
            }
            other => {
                log::debug!("ignoring host action {other:?}");
                Ok(())
            }
        }
    }

    fn set_global_pointer(&self, attach: bool) -> Result<(), EngineError> {
        if self.global_attached.get() == attach {
            return Ok(());
        }
        let target: &EventTarget = &self.window;
        let on_move = self.global_move.as_ref().unchecked_ref();
        let on_up = self.global_up.as_ref().unchecked_ref();
        if attach {
            target.add_event_listener_with_callback("mousemove", on_move)?;
            target.add_event_listener_with_callback("mouseup", on_up)?;
        } else {
            target.remove_event_listener_with_callback("mousemove", on_move)?;
            target.remove_event_listener_with_callback("mouseup", on_up)?;
        }
        self.global_attached.set(attach);
        Ok(())
    }

    /// Client coordinates relative to the workspace's top-left corner.
    fn workspace_point(&self, mouse: &MouseEvent) -> Point {
        let rect = self.engine.borrow().layers().workspace().get_bounding_client_rect();
        Point::new(f64::from(mouse.client_x()) - rect.left(), f64::from(mouse.client_y()) - rect.top())
    }
}

fn listener(host: &Weak<Host>, handler: fn(&Host, &Event)) -> Listener {
    let host = host.clone();
    Closure::wrap(Box::new(move |event: Event| {
        if let Some(host) = host.upgrade() {
            handler(&host, &event);
        }
    }) as Box<dyn FnMut(Event)>)
}

// =============================================================
// Handlers
// =============================================================

fn on_mouse_down(host: &Host, event: &Event) {
    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
        return;
    };
    let target = if closest(event, "polygon").is_some() { PointerTarget::Shape } else { PointerTarget::Background };
    event.prevent_default();
    host.dispatch(&UiEvent::PointerDown { target, button: Button::from_dom(mouse.button()) }, None);
}

fn on_global_move(host: &Host, event: &Event) {
    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
        return;
    };
    let delta = Delta::new(f64::from(mouse.movement_x()), f64::from(mouse.movement_y()));
    host.dispatch(&UiEvent::PointerMove { delta }, None);
}

fn on_global_up(host: &Host, _event: &Event) {
    host.dispatch(&UiEvent::PointerUp, None);
}

fn on_wheel(host: &Host, event: &Event) {
    let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
        return;
    };
    event.prevent_default();
    host.dispatch(&UiEvent::Wheel { delta_y: wheel.delta_y() }, None);
}

fn on_drag_over(_host: &Host, event: &Event) {
    event.prevent_default();
}

fn on_drop(host: &Host, event: &Event) {
    let Some(drag) = event.dyn_ref::<DragEvent>() else {
        return;
    };
    event.prevent_default();
    let payload = drag.data_transfer().and_then(|transfer| match transfer.get_data(DRAG_MEDIA_TYPE) {
        Ok(data) if !data.is_empty() => Some(data),
        Ok(_) => None,
        Err(err) => {
            log::debug!("drop data unreadable: {err:?}");
            None
        }
    });
    let at = host.workspace_point(drag);
    host.dispatch(&UiEvent::Drop { at, payload }, None);
}

fn on_drag_start(host: &Host, event: &Event) {
    let Some(drag) = event.dyn_ref::<DragEvent>() else {
        return;
    };
    let Some(raw) = closest(event, "[data-index]").and_then(|tile| tile.get_attribute("data-index")) else {
        log::debug!("dragstart outside a buffer tile");
        return;
    };
    match raw.parse::<usize>() {
        Ok(index) => host.dispatch(&UiEvent::DragStart { index }, drag.data_transfer().as_ref()),
        Err(err) => log::warn!("bad data-index {raw:?}: {err}"),
    }
}

fn on_drag_end(host: &Host, _event: &Event) {
    host.dispatch(&UiEvent::DragEnd, None);
}

fn on_click(host: &Host, event: &Event) {
    let Some(raw) = closest(event, "[data-command]").and_then(|button| button.get_attribute("data-command")) else {
        return;
    };
    match raw.parse::<Command>() {
        Ok(command) => host.dispatch(&UiEvent::Command(command), None),
        Err(err) => log::warn!("{err}"),
    }
}

fn closest(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?;
    let element = target.dyn_ref::<Element>()?;
    match element.closest(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("closest({selector}) failed: {err:?}");
            None
        }
    }
}

/// Seed for the shape generator from the JS clock and `Math.random`.
fn entropy_seed() -> u64 {
    js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits().rotate_left(32)
}
