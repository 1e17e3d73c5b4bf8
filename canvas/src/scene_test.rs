use super::*;
use crate::camera::Camera;

fn label(text: &str) -> Primitive {
    Primitive::Label { x: 0.0, y: 0.0, text: text.into() }
}

// =============================================================
// Command
// =============================================================

#[test]
fn command_round_trips_through_str() {
    for c in Command::ALL {
        assert_eq!(c.as_str().parse::<Command>(), Ok(c));
    }
}

#[test]
fn command_unknown_is_error() {
    assert_eq!("undo".parse::<Command>(), Err(UnknownCommand("undo".into())));
}

#[test]
fn command_labels() {
    let labels: Vec<_> = Command::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels, ["Create", "Save", "Clear"]);
}

// =============================================================
// Scene
// =============================================================

#[test]
fn new_scene_is_empty() {
    assert!(Scene::new().is_empty());
}

#[test]
fn shape_transform_alone_is_not_empty() {
    let mut scene = Scene::new();
    scene.set_shape_transform(Camera::default().layer_transform());
    assert!(!scene.is_empty());
}

#[test]
fn layers_iterate_back_to_front() {
    let scene = Scene::new()
        .with_layer(Layer::Shapes, vec![])
        .with_layer(Layer::Grid, vec![])
        .with_layer(Layer::Scale, vec![]);
    let order: Vec<_> = scene.layers().map(|(l, _)| l).collect();
    assert_eq!(order, [Layer::Grid, Layer::Scale, Layer::Shapes]);
}

#[test]
fn set_layer_replaces_contents() {
    let mut scene = Scene::new().with_layer(Layer::Scale, vec![label("a"), label("b")]);
    scene.set_layer(Layer::Scale, vec![label("c")]);
    assert_eq!(scene.layer(Layer::Scale), Some(&[label("c")][..]));
}

#[test]
fn merge_prefers_incoming_layers_and_transform() {
    let mut base = Scene::new()
        .with_layer(Layer::Grid, vec![label("old")])
        .with_layer(Layer::Buffer, vec![]);
    let mut incoming = Scene::new().with_layer(Layer::Grid, vec![label("new")]);
    let t = Camera { zoom: 2.0, offset_x: 1.0, offset_y: 1.0 }.layer_transform();
    incoming.set_shape_transform(t);

    base.merge(incoming);

    assert_eq!(base.layer(Layer::Grid), Some(&[label("new")][..]));
    assert!(base.layer(Layer::Buffer).is_some());
    assert_eq!(base.shape_transform(), Some(t));
}

#[test]
fn merge_keeps_transform_when_incoming_has_none() {
    let mut base = Scene::new();
    let t = Camera::default().layer_transform();
    base.set_shape_transform(t);
    base.merge(Scene::new().with_layer(Layer::Buffer, vec![]));
    assert_eq!(base.shape_transform(), Some(t));
}
