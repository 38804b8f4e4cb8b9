//! Integration tests for sevenswitch-core.
//!
//! These tests verify the public API works correctly end-to-end.

use sevenswitch_core::{
    BoxStyle, Canvas, Color, CornerRadius, DrawCommand, EasedValue, Point,
    RecordingCanvas, Rect, Shadow, TextStyle,
};

// =============================================================================
// Color Integration Tests
// =============================================================================

#[test]
fn test_color_roundtrip_hex() {
    let original = Color::rgb(0.3, 0.85, 0.39);
    let parsed: Color = original.to_hex().parse().expect("valid hex");

    assert!((original.r - parsed.r).abs() < 0.01);
    assert!((original.g - parsed.g).abs() < 0.01);
    assert!((original.b - parsed.b).abs() < 0.01);
}

#[test]
fn test_color_lerp_gradient() {
    let start = Color::TRANSPARENT;
    let end = Color::rgb(0.3, 0.85, 0.39);

    let steps: Vec<Color> = (0..=10)
        .map(|i| start.lerp(&end, i as f32 / 10.0))
        .collect();

    assert_eq!(steps[0], start);
    assert!((steps[10].g - end.g).abs() < 0.001);
    assert!(steps.windows(2).all(|w| w[0].a <= w[1].a));
}

// =============================================================================
// Animation Integration Tests
// =============================================================================

#[test]
fn test_eased_value_driven_by_frames() {
    let mut value = EasedValue::new(0.0, 1.0, 0.3);
    let mut frames = 0;
    while !value.is_complete() {
        value.update(1.0 / 60.0);
        frames += 1;
        assert!(frames < 100, "animation never completed");
    }
    // 0.3s at 60fps, give or take float accumulation
    assert!((18..=19).contains(&frames));
    assert_eq!(value.value(), 1.0);
}

// =============================================================================
// Canvas Integration Tests
// =============================================================================

#[test]
fn test_recording_canvas_full_frame() {
    let mut canvas = RecordingCanvas::new();
    let track = Rect::new(0.0, 0.0, 50.0, 30.0);

    canvas.draw_box(
        track,
        CornerRadius::uniform(15.0),
        &BoxStyle::fill(Color::WHITE),
    );
    canvas.draw_box(
        track.inset(1.0),
        CornerRadius::uniform(14.0),
        &BoxStyle::fill(Color::WHITE).with_shadow(Shadow {
            color: Color::BLACK,
            ..Shadow::default()
        }),
    );
    canvas.push_clip(Rect::new(0.0, 0.0, 20.0, 30.0));
    canvas.draw_text("ON", Point::new(2.0, 8.0), &TextStyle::default());
    canvas.pop_clip();

    let commands = canvas.take_commands();
    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[2], DrawCommand::Clip { .. }));
    assert!(matches!(commands[2].innermost(), DrawCommand::Text { content, .. } if content == "ON"));

    let json = serde_json::to_string(&commands).expect("serializable");
    let back: Vec<DrawCommand> = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, commands);
}
