//! Toolbar with the Create, Save and Clear commands.

use crate::component::Component;
use crate::engine::Action;
use crate::input::{ComponentId, InputBus, UiEvent};
use crate::scene::{Command, Layer, Primitive, Scene};

#[derive(Debug, Clone, Copy, Default)]
pub struct Toolbar;

impl Component for Toolbar {
    fn id(&self) -> ComponentId {
        ComponentId::Toolbar
    }

    fn render(&self, scene: &mut Scene) {
        let buttons = Command::ALL.into_iter().map(|command| Primitive::Button { command }).collect();
        scene.set_layer(Layer::Controls, buttons);
    }

    fn handle_event(&mut self, event: &UiEvent, _bus: &mut InputBus) -> Vec<Action> {
        match event {
            UiEvent::Command(command) => vec![Action::RunCommand(*command)],
            _ => Vec::new(),
        }
    }
}
