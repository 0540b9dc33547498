use chart_gesture::annotations::{AnnotationLabel, XAxisAnnotationConfig};
use chart_gesture::api::{
    ChartInteraction, HeadlessViewportHost, InteractionCallbacks, InteractionConfig, SelectionAxis,
};
use chart_gesture::core::{AxisRange, GridRect, ScreenPoint, Viewport};
use chart_gesture::interaction::{InputEvent, PointerInput, ToolbarTool};
use chart_gesture::render::{NullRenderer, RectRole};

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
) -> ChartInteraction<HeadlessViewportHost> {
    let mut engine =
        ChartInteraction::new(host, config, InteractionCallbacks::new()).expect("engine init");
    engine.attach();
    engine
}

#[test]
fn idle_chart_renders_an_empty_frame() {
    let engine = engine_with(host(), InteractionConfig::default());
    let mut renderer = NullRenderer::default();

    engine.render_overlay(&mut renderer).expect("render");

    let frame = engine.build_overlay_frame().expect("frame");
    assert!(frame.is_empty());
    assert!((frame.grid_width - 200.0).abs() <= 1e-9);
    assert_eq!(renderer.last_rect_count, 0);
}

#[test]
fn zoom_box_is_drawn_while_dragging() {
    let host = host().with_translate(ScreenPoint::new(30.0, 5.0));
    let mut engine = engine_with(host, InteractionConfig::default());

    engine.handle_event(&InputEvent::PointerDown(PointerInput::new(20.0, 50.0, 0)));
    engine.handle_event(&InputEvent::PointerMove(PointerInput::new(70.0, 50.0, 10)));

    let frame = engine.build_overlay_frame().expect("frame");
    let zoom: Vec<_> = frame.rects_with_role(RectRole::ZoomBox).collect();
    assert_eq!(zoom.len(), 1);
    assert!((zoom[0].x - 50.0).abs() <= 1e-9);
    assert!((zoom[0].y - 5.0).abs() <= 1e-9);
    assert!((zoom[0].width - 50.0).abs() <= 1e-9);
    assert!((zoom[0].fill.alpha - 0.4).abs() <= 1e-9);

    engine.handle_event(&InputEvent::PointerUp(PointerInput::new(70.0, 50.0, 20)));
    let frame = engine.build_overlay_frame().expect("frame");
    assert_eq!(frame.rects_with_role(RectRole::ZoomBox).count(), 0);
}

#[test]
fn committed_selection_and_annotations_render_together() {
    let config = InteractionConfig::default()
        .with_selection(SelectionAxis::X)
        .with_auto_selected(ToolbarTool::Selection)
        .with_annotation(XAxisAnnotationConfig::range(10.0, 20.0))
        .with_annotation(XAxisAnnotationConfig::range(30.0, 40.0).selectable("window"))
        .with_annotation(XAxisAnnotationConfig::line(90.0).with_label(AnnotationLabel {
            text: "launch".to_owned(),
            ..AnnotationLabel::default()
        }));
    let mut engine = engine_with(host(), config);

    engine.handle_event(&InputEvent::PointerDown(PointerInput::new(20.0, 50.0, 0)));
    engine.handle_event(&InputEvent::PointerMove(PointerInput::new(120.0, 50.0, 10)));
    engine.handle_event(&InputEvent::PointerUp(PointerInput::new(120.0, 50.0, 20)));

    let mut renderer = NullRenderer::default();
    engine.render_overlay(&mut renderer).expect("render");
    assert_eq!(renderer.last_rect_count, 7);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_text_count, 1);

    let frame = engine.build_overlay_frame().expect("frame");
    assert_eq!(frame.rects_with_role(RectRole::SelectionBox).count(), 1);
    assert_eq!(frame.rects_with_role(RectRole::AnnotationRange).count(), 2);
    assert_eq!(frame.rects_with_role(RectRole::AnnotationHandle).count(), 2);

    let handles: Vec<_> = frame.rects_with_role(RectRole::SelectionHandle).collect();
    assert_eq!(handles.len(), 2);
    assert!((handles[0].x - 16.0).abs() <= 1e-9);
    assert!((handles[0].y - 46.0).abs() <= 1e-9);
    assert!((handles[1].x - 116.0).abs() <= 1e-9);

    let line = frame.lines[0];
    assert!((line.x1 - 180.0).abs() <= 1e-9);
    assert!((line.y2 - 100.0).abs() <= 1e-9);

    let label = &frame.texts[0];
    assert_eq!(label.text, "launch");
    assert!((label.x - 180.0).abs() <= 1e-9);
    assert!((label.y - 4.0).abs() <= 1e-9);
}

#[test]
fn borderless_line_annotation_draws_only_its_label() {
    let mut annotation = XAxisAnnotationConfig::line(50.0).with_label(AnnotationLabel {
        text: "mid".to_owned(),
        ..AnnotationLabel::default()
    });
    annotation.style.border_width = 0.0;
    let engine = engine_with(host(), InteractionConfig::default().with_annotation(annotation));

    let frame = engine.build_overlay_frame().expect("frame");

    assert!(frame.lines.is_empty());
    assert_eq!(frame.texts.len(), 1);
}

#[test]
fn no_frame_without_layout() {
    let mut engine = engine_with(host(), InteractionConfig::default());
    engine.host_mut().detach();

    assert!(engine.build_overlay_frame().is_none());
    let mut renderer = NullRenderer::default();
    engine.render_overlay(&mut renderer).expect("render is a no-op");
}
