use std::sync::Arc;

use layout_core::{
    Error, GeometryPlan, LayoutOps, Raw, Rect, SemanticArgs, WindowId,
    sim::{Call, SimDesktop},
};

fn fhd() -> (SimDesktop, LayoutOps, WindowId) {
    let sim = SimDesktop::new();
    let m = sim.add_monitor(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1080));
    let id = sim.add_window("term", m, Rect::new(100, 100, 800, 600));
    sim.focus(Some(id));
    let ops = LayoutOps::new(Arc::new(sim.clone()));
    (sim, ops, id)
}

#[test]
fn semantic_halves_end_to_end() {
    let (sim, ops, id) = fhd();
    let plan = ops
        .move_resize_semantic(SemanticArgs::new("right", "center", "50%", "50%"))
        .unwrap();
    assert_eq!(plan, GeometryPlan::rect(960, 270, 960, 540));
    assert_eq!(
        sim.mutations(),
        vec![
            Call::MoveResizeFrame(id, Rect::new(960, 270, 800, 600)),
            Call::MoveResizeFrame(id, Rect::new(960, 270, 960, 540)),
        ]
    );
    assert_eq!(sim.window(id).unwrap().frame, Rect::new(960, 270, 960, 540));
}

#[test]
fn resize_clamps_to_minimum() {
    let (sim, ops, id) = fhd();
    ops.resize_in_work_area(10, 10).unwrap();
    assert_eq!(
        sim.mutations(),
        vec![Call::MoveResizeFrame(id, Rect::new(100, 100, 50, 50))]
    );
}

#[test]
fn custom_minimum_extent() {
    let (sim, ops, id) = fhd();
    let ops = ops.with_min_extent(200);
    ops.move_resize_in_work_area(0, 0, 10, 300).unwrap();
    assert_eq!(sim.window(id).unwrap().frame, Rect::new(0, 0, 200, 300));
}

#[test]
fn move_keeps_size_and_skips_resize() {
    let (sim, ops, id) = fhd();
    ops.move_in_work_area(5, 6).unwrap();
    assert_eq!(
        sim.mutations(),
        vec![Call::MoveResizeFrame(id, Rect::new(5, 6, 800, 600))]
    );
}

#[test]
fn offsets_are_relative_to_work_area() {
    let sim = SimDesktop::new();
    sim.add_monitor(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1080));
    let m = sim.add_monitor(Rect::new(1920, 0, 2560, 1440), Rect::new(1920, 32, 2560, 1408));
    let id = sim.add_window("browser", m, Rect::new(2000, 100, 1000, 800));
    sim.focus(Some(id));
    let ops = LayoutOps::new(Arc::new(sim.clone()));

    assert_eq!(ops.get_work_area(), Rect::new(1920, 32, 2560, 1408));
    ops.move_resize_in_work_area(0, 0, 1280, 1408).unwrap();
    assert_eq!(sim.window(id).unwrap().frame, Rect::new(1920, 32, 1280, 1408));
}

#[test]
fn no_focus_is_a_soft_failure() {
    let (sim, ops, _) = fhd();
    sim.focus(None);
    assert_eq!(ops.get_work_area(), Rect::default());
    for err in [
        ops.resize_in_work_area(100, 100).unwrap_err(),
        ops.move_in_work_area(0, 0).unwrap_err(),
        ops.move_resize_in_work_area(0, 0, 100, 100).unwrap_err(),
        ops.move_to_monitor(0).unwrap_err(),
        ops.move_resize_semantic(SemanticArgs::new("left", "top", "null", "null"))
            .unwrap_err(),
    ] {
        assert_eq!(err, Error::NoFocusedWindow);
    }
    assert!(sim.calls().is_empty());
}

#[test]
fn monitor_index_bounds() {
    let (sim, ops, id) = fhd();
    sim.add_monitor(Rect::new(1920, 0, 1920, 1080), Rect::new(1920, 0, 1920, 1080));

    assert_eq!(
        ops.move_to_monitor(-1),
        Err(Error::MonitorOutOfRange { index: -1, count: 2 })
    );
    assert_eq!(
        ops.move_to_monitor(2),
        Err(Error::MonitorOutOfRange { index: 2, count: 2 })
    );
    assert!(sim.mutations().is_empty());

    ops.move_to_monitor(1).unwrap();
    assert_eq!(sim.mutations(), vec![Call::MoveToMonitor(id, 1)]);
    assert_eq!(sim.window(id).unwrap().monitor, 1);
}

#[test]
fn invalid_tokens_touch_nothing() {
    let (sim, ops, id) = fhd();
    sim.set_maximized(id, true);

    let err = ops
        .move_resize_semantic(SemanticArgs::new("left", "top", "huge", "50%"))
        .unwrap_err();
    assert_eq!(err, Error::InvalidSize("huge".into()));

    let err = ops
        .move_resize_semantic(SemanticArgs::new("diagonal", "top", "50%", "50%"))
        .unwrap_err();
    assert_eq!(err, Error::InvalidPosition("diagonal".into()));

    // Not even the unmaximize step ran.
    assert!(sim.calls().is_empty());
    assert!(sim.window(id).unwrap().maximized);
}

#[test]
fn semantic_position_only_uses_current_size() {
    let (sim, ops, id) = fhd();
    let plan = ops
        .move_resize_semantic(SemanticArgs::new("center", "middle", Raw::Absent, "null"))
        .unwrap();
    assert_eq!(plan, GeometryPlan::position(560, 240));
    assert_eq!(sim.mutations().len(), 1);
    assert_eq!(sim.window(id).unwrap().frame, Rect::new(560, 240, 800, 600));
}

#[test]
fn semantic_size_only_keeps_position() {
    let (sim, ops, id) = fhd();
    ops.move_resize_semantic(SemanticArgs::new("null", "null", "1000", "75%"))
        .unwrap();
    assert_eq!(
        sim.mutations(),
        vec![Call::MoveResizeFrame(id, Rect::new(100, 100, 1000, 810))]
    );
}

#[test]
fn maximized_window_centers_with_restored_size() {
    let (sim, ops, id) = fhd();
    sim.set_maximized(id, true);
    let plan = ops
        .move_resize_semantic(SemanticArgs::new("center", "middle", "null", "null"))
        .unwrap();
    assert_eq!(plan, GeometryPlan::position(560, 240));
    assert_eq!(
        sim.calls(),
        vec![
            Call::Unmaximize(id),
            Call::Untile(id),
            Call::MoveResizeFrame(id, Rect::new(560, 240, 800, 600)),
        ]
    );
    assert_eq!(sim.window(id).unwrap().frame, Rect::new(560, 240, 800, 600));
}

#[test]
fn maximized_window_is_restored_then_placed() {
    let (sim, ops, id) = fhd();
    sim.set_maximized(id, true);
    ops.move_resize_semantic(SemanticArgs::new("left", "top", "50%", "100%"))
        .unwrap();
    let calls = sim.calls();
    assert_eq!(calls.first(), Some(&Call::Unmaximize(id)));
    let w = sim.window(id).unwrap();
    assert!(!w.maximized);
    assert_eq!(w.frame, Rect::new(0, 0, 960, 1080));
}
