use std::cell::RefCell;
use std::rc::Rc;

use chart_gesture::api::{
    ChartInteraction, HeadlessViewportHost, InteractionCallbacks, InteractionConfig, RangeUpdate,
    WheelZoomStats,
};
use chart_gesture::core::{AxisOrientation, AxisRange, GridRect, Viewport};
use chart_gesture::interaction::{EventDisposition, InputEvent, WheelInput};

fn host() -> HeadlessViewportHost {
    HeadlessViewportHost::new(
        GridRect::new(0.0, 0.0, 200.0, 100.0),
        Viewport::single(AxisRange::new(0.0, 100.0), AxisRange::new(0.0, 50.0)),
    )
    .expect("valid host")
}

fn engine_with(
    host: HeadlessViewportHost,
    config: InteractionConfig,
    callbacks: InteractionCallbacks,
) -> ChartInteraction<HeadlessViewportHost> {
    let mut engine = ChartInteraction::new(host, config, callbacks).expect("engine init");
    engine.attach();
    engine
}

fn wheel(client_x: f64, delta_y: f64, time_ms: u64) -> InputEvent {
    InputEvent::Wheel(WheelInput::new(client_x, 50.0, delta_y, time_ms))
}

fn assert_range(actual: AxisRange, min: f64, max: f64) {
    assert!((actual.min - min).abs() <= 1e-9, "min {} != {min}", actual.min);
    assert!((actual.max - max).abs() <= 1e-9, "max {} != {max}", actual.max);
}

#[test]
fn wheel_in_at_center_halves_window() {
    let mut engine = engine_with(host(), InteractionConfig::default(), InteractionCallbacks::new());

    let disposition = engine.handle_event(&wheel(100.0, -1.0, 0));

    assert_eq!(disposition, EventDisposition::PreventDefault);
    assert_range(engine.host().viewport().x, 25.0, 75.0);
    assert!(engine.state().zoomed());
    assert!(engine.has_pending_wheel_zoom());
}

#[test]
fn wheel_in_keeps_value_under_pointer() {
    let mut engine = engine_with(host(), InteractionConfig::default(), InteractionCallbacks::new());

    engine.handle_event(&wheel(50.0, -1.0, 0));

    assert_range(engine.host().viewport().x, 12.5, 62.5);
}

#[test]
fn wheel_out_widens_about_center() {
    let zoomed_in = Viewport::single(AxisRange::new(25.0, 75.0), AxisRange::new(0.0, 50.0));
    let host = host().with_viewport(zoomed_in).expect("valid viewport");
    let mut engine = engine_with(host, InteractionConfig::default(), InteractionCallbacks::new());

    engine.handle_event(&wheel(20.0, 1.0, 0));

    assert_range(engine.host().viewport().x, 12.5, 87.5);
}

#[test]
fn wheel_out_is_clamped_to_full_domain() {
    let mut engine = engine_with(host(), InteractionConfig::default(), InteractionCallbacks::new());

    engine.handle_event(&wheel(100.0, 1.0, 0));

    assert_range(engine.host().viewport().x, 0.0, 100.0);
}

#[test]
fn wheel_zoom_sends_only_x_window() {
    let zoomed = Rc::new(RefCell::new(Vec::<RangeUpdate>::new()));
    let sink = zoomed.clone();
    let callbacks = InteractionCallbacks::new().on_zoomed(move |update| {
        sink.borrow_mut().push(update.clone());
    });
    let mut engine = engine_with(host(), InteractionConfig::default(), callbacks);

    engine.handle_event(&wheel(100.0, -1.0, 0));

    let (update, _) = &engine.host().updates()[0];
    assert!(update.yaxis.is_none());
    assert_eq!(zoomed.borrow().len(), 1);
}

#[test]
fn burst_inside_wheel_window_is_coalesced() {
    let mut engine = engine_with(host(), InteractionConfig::default(), InteractionCallbacks::new());

    engine.handle_event(&wheel(100.0, -1.0, 0));
    engine.handle_event(&wheel(100.0, -1.0, 50));
    engine.handle_event(&wheel(100.0, -1.0, 120));
    engine.poll_timers(300);

    assert_eq!(engine.host().updates().len(), 1);
    assert_eq!(
        engine.wheel_stats(),
        WheelZoomStats {
            immediate: 1,
            trailing_fired: 1,
            trailing_applied: 0,
        }
    );
    assert!(!engine.has_pending_wheel_zoom());
}

#[test]
fn trailing_execution_applies_once_window_elapsed() {
    let mut engine = engine_with(host(), InteractionConfig::default(), InteractionCallbacks::new());

    engine.handle_event(&wheel(100.0, -1.0, 0));
    engine.handle_event(&wheel(100.0, -1.0, 350));
    engine.poll_timers(449);
    assert_eq!(engine.host().updates().len(), 1);

    engine.poll_timers(450);

    assert_eq!(engine.host().updates().len(), 2);
    assert_range(engine.host().viewport().x, 37.5, 62.5);
    assert_eq!(
        engine.wheel_stats(),
        WheelZoomStats {
            immediate: 1,
            trailing_fired: 2,
            trailing_applied: 1,
        }
    );
}

#[test]
fn spaced_wheel_events_each_execute_immediately() {
    let mut engine = engine_with(host(), InteractionConfig::default(), InteractionCallbacks::new());

    engine.handle_event(&wheel(100.0, -1.0, 0));
    engine.handle_event(&wheel(100.0, -1.0, 1_000));

    assert_eq!(engine.wheel_stats().immediate, 2);
    assert_range(engine.host().viewport().x, 37.5, 62.5);
}

#[test]
fn disabled_wheel_zoom_lets_page_scroll() {
    let mut config = InteractionConfig::default();
    config.zoom.wheel_enabled = false;
    let mut engine = engine_with(host(), config, InteractionCallbacks::new());

    let disposition = engine.handle_event(&wheel(100.0, -1.0, 0));

    assert_eq!(disposition, EventDisposition::Handled);
    assert!(engine.host().updates().is_empty());
    assert!(!engine.has_pending_wheel_zoom());
}

#[test]
fn zero_delta_is_ignored() {
    let mut engine = engine_with(host(), InteractionConfig::default(), InteractionCallbacks::new());

    engine.handle_event(&wheel(100.0, 0.0, 0));

    assert!(engine.host().updates().is_empty());
}

#[test]
fn range_bar_wheel_zoom_targets_primary_y_axis() {
    let host = HeadlessViewportHost::new(
        GridRect::new(0.0, 0.0, 200.0, 100.0),
        Viewport::single(AxisRange::new(0.0, 10.0), AxisRange::new(1_000.0, 2_000.0)),
    )
    .expect("valid host")
    .with_orientation(AxisOrientation::RangeBar);
    let mut engine = engine_with(host, InteractionConfig::default(), InteractionCallbacks::new());

    engine.handle_event(&wheel(100.0, -1.0, 0));

    let viewport = engine.host().viewport();
    assert_range(viewport.y[0], 1_250.0, 1_750.0);
    assert_eq!(viewport.x, AxisRange::new(0.0, 10.0));
}
