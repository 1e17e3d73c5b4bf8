//! Input model: UI events, the pan gesture state, and the global input bus.
//!
//! `UiEvent` is the only way input reaches the engine. The host translates DOM
//! events into it after correcting pointer positions to workspace-relative CSS
//! pixels. `InputBus` tracks which components want window-level pointer
//! move/up events; the host attaches those listeners only while the bus has at
//! least one subscriber.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::{Delta, Point};
use crate::scene::Command;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// What a workspace pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty workspace, grid or ruler.
    Background,
    /// A placed shape.
    Shape,
}

/// Every input the engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer pressed over the workspace.
    PointerDown { target: PointerTarget, button: Button },
    /// Window-level pointer movement, delivered only to bus subscribers.
    PointerMove { delta: Delta },
    /// Window-level pointer release, delivered only to bus subscribers.
    PointerUp,
    /// Wheel over the workspace. Negative `delta_y` scrolls up.
    Wheel { delta_y: f64 },
    /// A buffer thumbnail started dragging.
    DragStart { index: usize },
    /// The drag that started on the buffer finished, dropped or not.
    DragEnd,
    /// Something was dropped on the workspace at `at` (screen space).
    Drop { at: Point, payload: Option<String> },
    /// Toolbar button pressed.
    Command(Command),
}

/// Which component a subscription belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentId {
    Toolbar,
    Tray,
    Viewport,
}

/// Gesture tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the workspace.
    Panning,
}

/// Subscriptions to window-level pointer events.
#[derive(Debug, Clone, Default)]
pub struct InputBus {
    subscribers: Vec<ComponentId>,
}

impl InputBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `id`. Returns `true` if it was not already subscribed.
    pub fn subscribe(&mut self, id: ComponentId) -> bool {
        if self.subscribers.contains(&id) {
            return false;
        }
        self.subscribers.push(id);
        true
    }

    /// Unsubscribe `id`. Returns `true` if it was subscribed.
    pub fn unsubscribe(&mut self, id: ComponentId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| *s != id);
        self.subscribers.len() != before
    }

    #[must_use]
    pub fn is_subscribed(&self, id: ComponentId) -> bool {
        self.subscribers.contains(&id)
    }

    /// Current subscribers in subscription order.
    #[must_use]
    pub fn subscribers(&self) -> &[ComponentId] {
        &self.subscribers
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
