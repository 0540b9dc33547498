use chart_gesture::api::{ChartInteraction, HeadlessViewportHost, InteractionCallbacks, InteractionConfig};
use chart_gesture::core::{
    AxisOrientation, AxisRange, AxisScales, CoordinateMapper, GridRect, RatioSet, Viewport,
};
use chart_gesture::interaction::{InputEvent, PointerInput, WheelInput};
use chart_gesture::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_mapper_round_trip(c: &mut Criterion) {
    let viewport = Viewport::new(
        AxisRange::new(0.0, 10_000.0),
        [AxisRange::new(-50.0, 50.0), AxisRange::new(0.0, 2_500.0)],
    );
    let scales = AxisScales::from_viewport(&viewport);
    let ratios = RatioSet::from_viewport(&viewport, 1_600.0, 900.0).expect("valid ratios");
    let mapper = CoordinateMapper::new(AxisOrientation::Normal, &scales, &ratios);

    c.bench_function("mapper_round_trip", |b| {
        b.iter(|| {
            let value = mapper.x_to_data(black_box(812.5));
            let _ = mapper.data_to_x(value);
            let _ = mapper.y_ranges(black_box(120.0), black_box(640.0));
        })
    });
}

fn bench_drag_zoom_gesture(c: &mut Criterion) {
    c.bench_function("drag_zoom_gesture_100_moves", |b| {
        b.iter(|| {
            let host = HeadlessViewportHost::new(
                GridRect::new(40.0, 10.0, 1_600.0, 900.0),
                Viewport::single(AxisRange::new(0.0, 10_000.0), AxisRange::new(0.0, 2_500.0)),
            )
            .expect("valid host");
            let mut engine =
                ChartInteraction::new(host, InteractionConfig::default(), InteractionCallbacks::new())
                    .expect("engine init");
            engine.attach();

            engine.handle_event(&InputEvent::PointerDown(PointerInput::new(100.0, 300.0, 0)));
            for step in 1..=100_u32 {
                let x = 100.0 + f64::from(step) * 10.0;
                engine.handle_event(&InputEvent::PointerMove(PointerInput::new(
                    x,
                    300.0,
                    u64::from(step),
                )));
            }
            engine.handle_event(&InputEvent::PointerUp(PointerInput::new(1_100.0, 300.0, 101)));
            black_box(engine.host().viewport().x);
        })
    });
}

fn bench_wheel_zoom_and_overlay(c: &mut Criterion) {
    let host = HeadlessViewportHost::new(
        GridRect::new(40.0, 10.0, 1_600.0, 900.0),
        Viewport::single(AxisRange::new(0.0, 10_000.0), AxisRange::new(0.0, 2_500.0)),
    )
    .expect("valid host");
    let mut engine =
        ChartInteraction::new(host, InteractionConfig::default(), InteractionCallbacks::new())
            .expect("engine init");
    engine.attach();
    let mut renderer = NullRenderer::default();
    let mut now = 0_u64;

    c.bench_function("wheel_zoom_and_overlay", |b| {
        b.iter(|| {
            now += 1_000;
            let delta = if now % 2_000 == 0 { -1.0 } else { 1.0 };
            engine.handle_event(&InputEvent::Wheel(WheelInput::new(840.0, 400.0, delta, now)));
            engine.render_overlay(&mut renderer).expect("render overlay");
        })
    });
}

criterion_group!(
    benches,
    bench_mapper_round_trip,
    bench_drag_zoom_gesture,
    bench_wheel_zoom_and_overlay
);
criterion_main!(benches);
