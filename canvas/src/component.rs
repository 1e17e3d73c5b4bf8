//! Component boundary shared by every UI piece.
//!
//! A component owns its state, describes itself as scene layers, and turns
//! [`UiEvent`]s into [`Action`]s. It never touches the DOM; the host applies
//! the resulting scenes through [`crate::render`].

use crate::engine::Action;
use crate::input::{ComponentId, InputBus, UiEvent};
use crate::scene::Scene;

pub trait Component {
    /// Identity used for input-bus subscriptions.
    fn id(&self) -> ComponentId;

    /// Initial scene for this component.
    fn mount(&mut self) -> Scene {
        let mut scene = Scene::new();
        self.render(&mut scene);
        scene
    }

    /// Write every layer this component owns into `scene`.
    fn render(&self, scene: &mut Scene);

    /// React to one event. Events the component does not care about yield no
    /// actions.
    fn handle_event(&mut self, event: &UiEvent, bus: &mut InputBus) -> Vec<Action>;
}
