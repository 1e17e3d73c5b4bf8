use super::*;

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
}

#[test]
fn button_from_dom_unknown_is_primary() {
    assert_eq!(Button::from_dom(4), Button::Primary);
    assert_eq!(Button::from_dom(-1), Button::Primary);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

// =============================================================
// InputBus
// =============================================================

#[test]
fn bus_starts_empty() {
    let bus = InputBus::new();
    assert!(bus.is_empty());
    assert!(!bus.is_subscribed(ComponentId::Viewport));
}

#[test]
fn subscribe_then_unsubscribe() {
    let mut bus = InputBus::new();
    assert!(bus.subscribe(ComponentId::Viewport));
    assert!(bus.is_subscribed(ComponentId::Viewport));
    assert!(bus.unsubscribe(ComponentId::Viewport));
    assert!(bus.is_empty());
}

#[test]
fn double_subscribe_is_idempotent() {
    let mut bus = InputBus::new();
    assert!(bus.subscribe(ComponentId::Viewport));
    assert!(!bus.subscribe(ComponentId::Viewport));
    assert_eq!(bus.subscribers(), &[ComponentId::Viewport]);
}

#[test]
fn unsubscribe_unknown_is_noop() {
    let mut bus = InputBus::new();
    bus.subscribe(ComponentId::Tray);
    assert!(!bus.unsubscribe(ComponentId::Viewport));
    assert_eq!(bus.subscribers(), &[ComponentId::Tray]);
}

#[test]
fn subscribers_keep_order() {
    let mut bus = InputBus::new();
    bus.subscribe(ComponentId::Tray);
    bus.subscribe(ComponentId::Viewport);
    assert_eq!(bus.subscribers(), &[ComponentId::Tray, ComponentId::Viewport]);
}
