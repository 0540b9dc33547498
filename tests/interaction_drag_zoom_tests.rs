use std::cell::RefCell;
use std::rc::Rc;

use chart_gesture::api::{
    ChartInteraction, HeadlessViewportHost, InteractionCallbacks, InteractionConfig, RangeUpdate,
    SelectionAxis, ViewportHost,
};
use chart_gesture::core::{AxisRange, GridRect, Viewport};
use chart_gesture::interaction::{
    EventDisposition, GestureMode, InputEvent, InteractionMode, PointerInput,
};

fn host() -> HeadlessViewportHost {
    HeadlessViewportHost::new(
        GridRect::new(0.0, 0.0, 200.0, 100.0),
        Viewport::single(AxisRange::new(0.0, 100.0), AxisRange::new(0.0, 50.0)),
    )
    .expect("valid host")
}

fn down(x: f64, y: f64, time_ms: u64) -> InputEvent {
    InputEvent::PointerDown(PointerInput::new(x, y, time_ms))
}

fn moved(x: f64, y: f64, time_ms: u64) -> InputEvent {
    InputEvent::PointerMove(PointerInput::new(x, y, time_ms))
}

fn up(x: f64, y: f64, time_ms: u64) -> InputEvent {
    InputEvent::PointerUp(PointerInput::new(x, y, time_ms))
}

fn attached(
    host: HeadlessViewportHost,
    config: InteractionConfig,
    callbacks: InteractionCallbacks,
) -> ChartInteraction<HeadlessViewportHost> {
    let mut engine = ChartInteraction::new(host, config, callbacks).expect("engine init");
    engine.attach();
    engine
}

fn drag(engine: &mut ChartInteraction<HeadlessViewportHost>, from: (f64, f64), to: (f64, f64)) {
    let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
    engine.handle_event(&down(from.0, from.1, 0));
    engine.handle_event(&moved(mid.0, mid.1, 10));
    engine.handle_event(&moved(to.0, to.1, 20));
    engine.handle_event(&up(to.0, to.1, 30));
}

#[test]
fn drag_zoom_commits_mapped_domain_range() {
    let mut engine = attached(host(), InteractionConfig::default(), InteractionCallbacks::new());

    drag(&mut engine, (20.0, 50.0), (120.0, 50.0));

    let viewport = engine.host().viewport();
    assert!((viewport.x.min - 10.0).abs() <= 1e-9);
    assert!((viewport.x.max - 60.0).abs() <= 1e-9);
    assert_eq!(viewport.y[0], AxisRange::new(0.0, 50.0));

    let (update, animate) = &engine.host().updates()[0];
    assert!(update.yaxis.is_none());
    assert!(*animate);
    assert!(engine.state().zoomed());
    assert!(!engine.overlay().zoom_box().visible);
}

#[test]
fn interaction_mode_follows_press_drag_release() {
    let mut engine = attached(host(), InteractionConfig::default(), InteractionCallbacks::new());

    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert_eq!(engine.handle_event(&down(20.0, 50.0, 0)), EventDisposition::Handled);
    assert_eq!(engine.interaction_mode(), InteractionMode::Pressed);

    engine.handle_event(&moved(60.0, 50.0, 10));
    assert_eq!(
        engine.interaction_mode(),
        InteractionMode::Dragging(GestureMode::ZoomSelect)
    );
    let zoom_box = engine.overlay().zoom_box();
    assert!(zoom_box.visible);
    assert!((zoom_box.rect.x - 20.0).abs() <= 1e-9);
    assert!((zoom_box.rect.width - 40.0).abs() <= 1e-9);
    assert!((zoom_box.rect.height - 100.0).abs() <= 1e-9);

    engine.handle_event(&up(60.0, 50.0, 20));
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn drag_within_threshold_is_not_committed() {
    let mut engine = attached(host(), InteractionConfig::default(), InteractionCallbacks::new());

    engine.handle_event(&down(20.0, 50.0, 0));
    engine.handle_event(&moved(28.0, 55.0, 10));
    engine.handle_event(&up(28.0, 55.0, 20));

    assert!(engine.host().updates().is_empty());
    assert!(!engine.state().zoomed());
}

#[test]
fn click_without_movement_is_not_committed() {
    let mut engine = attached(host(), InteractionConfig::default(), InteractionCallbacks::new());

    engine.handle_event(&down(20.0, 50.0, 0));
    engine.handle_event(&up(80.0, 50.0, 10));

    assert!(engine.host().updates().is_empty());
}

#[test]
fn backwards_drag_yields_the_same_range() {
    let mut engine = attached(host(), InteractionConfig::default(), InteractionCallbacks::new());

    drag(&mut engine, (120.0, 50.0), (20.0, 50.0));

    let viewport = engine.host().viewport();
    assert!((viewport.x.min - 10.0).abs() <= 1e-9);
    assert!((viewport.x.max - 60.0).abs() <= 1e-9);
}

#[test]
fn drag_beyond_grid_is_clamped_to_grid_edge() {
    let mut engine = attached(host(), InteractionConfig::default(), InteractionCallbacks::new());

    drag(&mut engine, (150.0, 50.0), (400.0, 50.0));

    let viewport = engine.host().viewport();
    assert!((viewport.x.min - 75.0).abs() <= 1e-9);
    assert!((viewport.x.max - 100.0).abs() <= 1e-9);
}

#[test]
fn xy_zoom_updates_both_axes() {
    let config = InteractionConfig::default().with_zoom_axis(SelectionAxis::Xy);
    let mut engine = attached(host(), config, InteractionCallbacks::new());

    drag(&mut engine, (20.0, 20.0), (120.0, 70.0));

    let viewport = engine.host().viewport();
    assert!((viewport.x.min - 10.0).abs() <= 1e-9);
    assert!((viewport.x.max - 60.0).abs() <= 1e-9);
    assert!((viewport.y[0].min - 15.0).abs() <= 1e-9);
    assert!((viewport.y[0].max - 40.0).abs() <= 1e-9);
}

#[test]
fn y_zoom_keeps_x_window() {
    let config = InteractionConfig::default().with_zoom_axis(SelectionAxis::Y);
    let mut engine = attached(host(), config, InteractionCallbacks::new());

    drag(&mut engine, (20.0, 20.0), (120.0, 70.0));

    let (update, _) = &engine.host().updates()[0];
    assert!(update.xaxis.is_none());
    let viewport = engine.host().viewport();
    assert_eq!(viewport.x, AxisRange::new(0.0, 100.0));
    assert!((viewport.y[0].min - 15.0).abs() <= 1e-9);
    assert!((viewport.y[0].max - 40.0).abs() <= 1e-9);
}

#[test]
fn grouped_chart_never_sends_y_ranges_to_host() {
    let zoomed = Rc::new(RefCell::new(Vec::<RangeUpdate>::new()));
    let sink = zoomed.clone();
    let callbacks = InteractionCallbacks::new().on_zoomed(move |update| {
        sink.borrow_mut().push(update.clone());
    });
    let config = InteractionConfig::default()
        .with_zoom_axis(SelectionAxis::Xy)
        .with_group("linked");
    let mut engine = attached(host(), config, callbacks);

    drag(&mut engine, (20.0, 20.0), (120.0, 70.0));

    let (update, _) = &engine.host().updates()[0];
    assert!(update.yaxis.is_none());
    assert_eq!(engine.host().viewport().y[0], AxisRange::new(0.0, 50.0));

    let zoomed = zoomed.borrow();
    assert_eq!(zoomed.len(), 1);
    let y = zoomed[0].yaxis.as_ref().expect("callback keeps y bounds");
    assert!((y[0].min - 15.0).abs() <= 1e-9);
}

#[test]
fn categorical_zoom_snaps_to_whole_categories() {
    let host = HeadlessViewportHost::new(
        GridRect::new(0.0, 0.0, 200.0, 100.0),
        Viewport::single(AxisRange::new(0.0, 10.0), AxisRange::new(0.0, 50.0)),
    )
    .expect("valid host")
    .with_category_count(10);
    let mut engine = attached(host, InteractionConfig::default(), InteractionCallbacks::new());

    // raw [0.6, 1.4] floors below the first category and resets to all of them
    drag(&mut engine, (12.0, 50.0), (28.0, 50.0));
    assert_eq!(engine.host().viewport().x, AxisRange::new(1.0, 10.0));
}

#[test]
fn narrow_categorical_zoom_spans_one_category() {
    let host = HeadlessViewportHost::new(
        GridRect::new(0.0, 0.0, 200.0, 100.0),
        Viewport::single(AxisRange::new(0.0, 10.0), AxisRange::new(0.0, 50.0)),
    )
    .expect("valid host")
    .with_category_count(10);
    let mut engine = attached(host, InteractionConfig::default(), InteractionCallbacks::new());

    // raw [3.2, 4.1]
    drag(&mut engine, (64.0, 50.0), (82.0, 50.0));
    assert_eq!(engine.host().viewport().x, AxisRange::new(3.0, 4.0));
}

#[test]
fn before_zoom_hook_overrides_candidate_axes() {
    let seen = Rc::new(RefCell::new(Vec::<RangeUpdate>::new()));
    let sink = seen.clone();
    let callbacks = InteractionCallbacks::new().before_zoom(move |candidate| {
        sink.borrow_mut().push(candidate.clone());
        RangeUpdate::x_only(AxisRange::new(0.0, 30.0))
    });
    let config = InteractionConfig::default().with_zoom_axis(SelectionAxis::Xy);
    let mut engine = attached(host(), config, callbacks);

    drag(&mut engine, (20.0, 20.0), (120.0, 70.0));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    let candidate_x = seen[0].xaxis.expect("candidate x");
    assert!((candidate_x.min - 10.0).abs() <= 1e-9);

    let viewport = engine.host().viewport();
    assert_eq!(viewport.x, AxisRange::new(0.0, 30.0));
    assert!((viewport.y[0].min - 15.0).abs() <= 1e-9);
}

#[test]
fn non_finite_hook_result_discards_zoom() {
    let callbacks = InteractionCallbacks::new()
        .before_zoom(|_| RangeUpdate::x_only(AxisRange::new(f64::NAN, 1.0)));
    let mut engine = attached(host(), InteractionConfig::default(), callbacks);

    drag(&mut engine, (20.0, 50.0), (120.0, 50.0));

    assert!(engine.host().updates().is_empty());
}

#[test]
fn animate_flag_follows_config() {
    let config = InteractionConfig {
        animate: false,
        ..InteractionConfig::default()
    };
    let mut engine = attached(host(), config, InteractionCallbacks::new());

    drag(&mut engine, (20.0, 50.0), (120.0, 50.0));

    let (_, animate) = &engine.host().updates()[0];
    assert!(!animate);
}

#[test]
fn grid_offset_and_bar_padding_shift_local_coordinates() {
    let host = HeadlessViewportHost::new(
        GridRect::new(40.0, 10.0, 200.0, 100.0),
        Viewport::single(AxisRange::new(0.0, 100.0), AxisRange::new(0.0, 50.0)),
    )
    .expect("valid host")
    .with_bar_padding(5.0);
    let mut engine = attached(host, InteractionConfig::default(), InteractionCallbacks::new());

    drag(&mut engine, (65.0, 60.0), (165.0, 60.0));

    let viewport = engine.host().viewport();
    assert!((viewport.x.min - 10.0).abs() <= 1e-9);
    assert!((viewport.x.max - 60.0).abs() <= 1e-9);
}

#[test]
fn missing_layout_makes_input_a_no_op() {
    let mut engine = attached(host(), InteractionConfig::default(), InteractionCallbacks::new());
    engine.host_mut().detach();
    assert!(engine.host().geometry().is_none());

    assert_eq!(engine.handle_event(&down(20.0, 50.0, 0)), EventDisposition::Ignored);
    engine.handle_event(&moved(120.0, 50.0, 10));
    engine.handle_event(&up(120.0, 50.0, 20));

    assert!(engine.host().updates().is_empty());
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}
