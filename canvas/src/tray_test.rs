use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::consts::PLACEMENT_FILL;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

fn list(s: &str) -> PointList {
    s.parse().unwrap()
}

fn tray_with(lists: &[&str]) -> ShapeTray {
    let mut tray = ShapeTray::default();
    tray.restore(lists.iter().map(|s| list(s)).collect());
    tray
}

// =============================================================
// fill
// =============================================================

#[test]
fn fill_adds_a_batch_within_bounds() {
    let mut tray = ShapeTray::default();
    let added = tray.fill(&mut rng());
    assert!((CREATE_BATCH_MIN..=CREATE_BATCH_MAX).contains(&added));
    assert_eq!(tray.len(), added);
    assert!(tray.shapes().iter().all(|s| s.fill == PLACEMENT_FILL));
}

#[test]
fn fill_never_exceeds_capacity() {
    let mut tray = ShapeTray::default();
    let mut rng = rng();
    for _ in 0..10 {
        tray.fill(&mut rng);
        assert!(tray.len() <= BUFFER_CAPACITY);
    }
    assert_eq!(tray.len(), BUFFER_CAPACITY);
}

#[test]
fn fill_tops_up_nearly_full_tray() {
    let eighteen: Vec<PointList> = (0..18).map(|i| list(&format!("{i},0 1,1 0,1"))).collect();
    let mut tray = ShapeTray::default();
    tray.restore(eighteen);
    let mut rng = rng();

    assert_eq!(tray.fill(&mut rng), 2);
    assert_eq!(tray.fill(&mut rng), 0);
    assert_eq!(tray.fill(&mut rng), 0);
    assert_eq!(tray.len(), 20);
}

#[test]
fn fill_is_deterministic_for_a_seed() {
    let mut a = ShapeTray::default();
    let mut b = ShapeTray::default();
    a.fill(&mut rng());
    b.fill(&mut rng());
    assert_eq!(a.snapshot(), b.snapshot());
}

// =============================================================
// restore / clear
// =============================================================

#[test]
fn restore_truncates_to_capacity() {
    let many: Vec<PointList> = (0..25).map(|i| list(&format!("{i},0 1,1 0,1"))).collect();
    let mut tray = ShapeTray::default();
    tray.restore(many.clone());
    assert_eq!(tray.len(), BUFFER_CAPACITY);
    assert_eq!(tray.snapshot(), many[..BUFFER_CAPACITY].to_vec());
}

#[test]
fn clear_empties_tray_and_drag_source() {
    let mut tray = tray_with(&["0,0 1,0 0,1"]);
    tray.begin_drag(0);
    tray.clear();
    assert!(tray.is_empty());
    assert_eq!(tray.drag_source(), None);
}

// =============================================================
// Drag source
// =============================================================

#[test]
fn begin_drag_returns_payload() {
    let mut tray = tray_with(&["0,0 1,0 0,1", "0,0 10,0 5,10"]);
    assert_eq!(tray.begin_drag(1).as_deref(), Some("0,0 10,0 5,10"));
    assert_eq!(tray.drag_source(), Some(1));
}

#[test]
fn begin_drag_out_of_range_is_none() {
    let mut tray = tray_with(&["0,0 1,0 0,1"]);
    assert_eq!(tray.begin_drag(3), None);
    assert_eq!(tray.drag_source(), None);
}

#[test]
fn take_drag_source_removes_matching_shape() {
    let mut tray = tray_with(&["0,0 1,0 0,1", "0,0 10,0 5,10", "2,2 3,2 2,3"]);
    tray.begin_drag(1);
    let taken = tray.take_drag_source(&list("0,0 10,0 5,10")).unwrap();
    assert_eq!(taken.points, list("0,0 10,0 5,10"));
    assert_eq!(tray.snapshot(), vec![list("0,0 1,0 0,1"), list("2,2 3,2 2,3")]);
    assert_eq!(tray.drag_source(), None);
}

#[test]
fn take_drag_source_with_other_points_keeps_shape() {
    let mut tray = tray_with(&["0,0 1,0 0,1"]);
    tray.begin_drag(0);
    assert!(tray.take_drag_source(&list("9,9 8,8 7,9")).is_none());
    assert_eq!(tray.len(), 1);
    assert_eq!(tray.drag_source(), None);
}

#[test]
fn take_without_drag_is_none() {
    let mut tray = tray_with(&["0,0 1,0 0,1"]);
    assert!(tray.take_drag_source(&list("0,0 1,0 0,1")).is_none());
    assert_eq!(tray.len(), 1);
}

// =============================================================
// Component
// =============================================================

#[test]
fn drag_start_event_sets_drag_data() {
    let mut tray = tray_with(&["0,0 10,0 5,10"]);
    let mut bus = InputBus::new();
    let actions = tray.handle_event(&UiEvent::DragStart { index: 0 }, &mut bus);
    assert_eq!(actions, vec![Action::SetDragData("0,0 10,0 5,10".into())]);
    assert!(bus.is_empty());
}

#[test]
fn drag_end_event_forgets_source() {
    let mut tray = tray_with(&["0,0 10,0 5,10"]);
    let mut bus = InputBus::new();
    tray.handle_event(&UiEvent::DragStart { index: 0 }, &mut bus);
    tray.handle_event(&UiEvent::DragEnd, &mut bus);
    assert_eq!(tray.drag_source(), None);
    assert_eq!(tray.len(), 1);
}

#[test]
fn buffer_scene_indexes_thumbnails() {
    let tray = tray_with(&["0,0 1,0 0,1", "0,0 10,0 5,10"]);
    let scene = tray.buffer_scene();
    let thumbs = scene.layer(Layer::Buffer).unwrap();
    assert_eq!(thumbs.len(), 2);
    assert!(matches!(&thumbs[1], Primitive::Thumbnail { index: 1, points, .. } if *points == list("0,0 10,0 5,10")));
}

#[test]
fn empty_tray_still_draws_empty_layer() {
    let scene = ShapeTray::default().buffer_scene();
    assert_eq!(scene.layer(Layer::Buffer), Some(&[][..]));
}

#[test]
fn drag_start_on_unknown_index_yields_nothing() {
    let mut tray = tray_with(&["0,0 10,0 5,10"]);
    let mut bus = InputBus::new();
    assert!(tray.handle_event(&UiEvent::DragStart { index: 4 }, &mut bus).is_empty());
    assert_eq!(tray.drag_source(), None);
}
