//! Integration tests for the SevenSwitch widget.
//!
//! Drives the widget the way a host would: events in, ticks, paint into a
//! recording canvas, notifications out.

use proptest::prelude::*;
use sevenswitch::{
    BoxStyle, Color, Constraints, DrawCommand, Event, ImageRef, MouseButton, Point, RecordingCanvas,
    Rect, SevenSwitch, Size, SwitchChanged, SwitchLabel, SwitchStyle, TouchId, Widget,
};

// =============================================================================
// Helpers
// =============================================================================

fn touch(id: u32, x: f32) -> (Event, Event) {
    (
        Event::TouchStart {
            id: TouchId(id),
            position: Point::new(x, 15.0),
            pressure: 1.0,
        },
        Event::TouchEnd {
            id: TouchId(id),
            position: Point::new(x, 15.0),
        },
    )
}

fn drag(switch: &mut SevenSwitch, from: f32, path: &[f32]) -> Vec<SwitchChanged> {
    let mut notes = Vec::new();
    let mut send = |switch: &mut SevenSwitch, event: Event| {
        if let Some(msg) = switch.event(&event) {
            notes.push(*msg.downcast::<SwitchChanged>().expect("SwitchChanged"));
        }
    };
    send(
        switch,
        Event::TouchStart {
            id: TouchId(0),
            position: Point::new(from, 15.0),
            pressure: 1.0,
        },
    );
    let (last, moves) = path.split_last().expect("non-empty path");
    for &x in moves {
        send(
            switch,
            Event::TouchMove {
                id: TouchId(0),
                position: Point::new(x, 15.0),
                pressure: 1.0,
            },
        );
    }
    send(
        switch,
        Event::TouchEnd {
            id: TouchId(0),
            position: Point::new(*last, 15.0),
        },
    );
    notes
}

fn settle(switch: &mut SevenSwitch) {
    let mut frames = 0;
    while switch.tick(1.0 / 60.0) {
        frames += 1;
        assert!(frames < 120, "animation never settled");
    }
}

fn paint(switch: &SevenSwitch) -> Vec<DrawCommand> {
    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);
    canvas.take_commands()
}

fn track_style(commands: &[DrawCommand]) -> &BoxStyle {
    match &commands[0] {
        DrawCommand::Rect { style, .. } => style,
        other => panic!("Expected track Rect, got {other:?}"),
    }
}

// =============================================================================
// Programmatic state
// =============================================================================

#[test]
fn test_set_on_off_scenario() {
    let mut switch = SevenSwitch::new();
    switch.set_on(true, false);
    assert!(switch.is_on());

    let commands = paint(&switch);
    let track = track_style(&commands);
    assert_eq!(track.fill, Some(SwitchStyle::default().on_tint_color));
    assert!(track.stroke.is_none(), "border hidden when on");

    match &commands[1] {
        DrawCommand::Rect { bounds, .. } => assert_eq!(bounds.right(), 49.0),
        other => panic!("Expected thumb Rect, got {other:?}"),
    }
}

#[test]
fn test_set_on_twice_is_idempotent() {
    let mut switch = SevenSwitch::new();
    switch.set_on(true, true);
    settle(&mut switch);
    let before = paint(&switch);

    switch.set_on(true, true);
    assert!(!switch.is_animating());
    settle(&mut switch);
    assert_eq!(paint(&switch), before);
}

#[test]
fn test_border_fades_while_animating_on() {
    let mut switch = SevenSwitch::new();
    switch.set_on(true, true);
    switch.tick(0.05);
    let commands = paint(&switch);
    let stroke = track_style(&commands)
        .stroke
        .as_ref()
        .expect("border still present mid-animation");
    let full = SwitchStyle::default().border_color.a;
    assert!(stroke.color.a > 0.0 && stroke.color.a < full);
}

// =============================================================================
// Gestures
// =============================================================================

#[test]
fn test_drag_far_right_turns_on_once() {
    let mut switch = SevenSwitch::new();
    let thumb_center = switch.geometry().thumb.center().x;
    let notes = drag(&mut switch, thumb_center, &[thumb_center + 1000.0]);

    assert!(switch.is_on());
    assert_eq!(notes, vec![SwitchChanged { on: true }]);
}

#[test]
fn test_drag_back_and_forth_to_start_side_does_not_notify() {
    let mut switch = SevenSwitch::with_state(true);
    let notes = drag(&mut switch, 35.0, &[10.0, 45.0, 30.0, 40.0]);
    assert!(switch.is_on());
    assert!(notes.is_empty());
}

#[test]
fn test_touch_cancel_reverts_without_notification() {
    let mut switch = SevenSwitch::new();
    switch.event(&Event::TouchStart {
        id: TouchId(3),
        position: Point::new(10.0, 15.0),
        pressure: 1.0,
    });
    switch.event(&Event::TouchMove {
        id: TouchId(3),
        position: Point::new(45.0, 15.0),
        pressure: 1.0,
    });
    assert!(switch.event(&Event::TouchCancel { id: TouchId(3) }).is_none());
    assert!(!switch.is_on());
    settle(&mut switch);
    assert_eq!(switch.on_fraction(), 0.0);
}

#[test]
fn test_mouse_drag_past_edge_turns_on() {
    let mut switch = SevenSwitch::new();
    for event in [
        Event::MouseDown {
            position: Point::new(15.0, 15.0),
            button: MouseButton::Left,
        },
        Event::MouseMove {
            position: Point::new(45.0, 15.0),
        },
        Event::MouseLeave,
        Event::MouseMove {
            position: Point::new(1015.0, 15.0),
        },
    ] {
        assert!(switch.event(&event).is_none());
    }
    assert!(switch.is_tracking());
    assert_eq!(switch.on_fraction(), 1.0);

    let msg = switch
        .event(&Event::MouseUp {
            position: Point::new(1015.0, 15.0),
            button: MouseButton::Left,
        })
        .and_then(|m| m.downcast::<SwitchChanged>().ok());
    assert_eq!(msg.map(|m| *m), Some(SwitchChanged { on: true }));
    assert!(switch.is_on());
    assert!(!switch.is_tracking());
}

#[test]
fn test_touch_during_transition_takes_over_thumb() {
    let mut switch = SevenSwitch::new();
    switch.set_on(true, true);
    switch.tick(0.05);

    switch.event(&Event::TouchStart {
        id: TouchId(0),
        position: Point::new(15.0, 15.0),
        pressure: 1.0,
    });
    let at_down = switch.on_fraction();

    // Finger held still while frames keep coming.
    switch.tick(0.1);
    assert_eq!(switch.on_fraction(), at_down);

    switch.event(&Event::TouchMove {
        id: TouchId(0),
        position: Point::new(16.0, 15.0),
        pressure: 1.0,
    });
    // Grown thumb travels 15px on the default switch.
    assert!((switch.on_fraction() - at_down).abs() <= 1.0 / 15.0 + 1e-5);
}

#[test]
fn test_switch_in_offset_bounds() {
    let mut switch = SevenSwitch::new();
    let size = switch.measure(Constraints::unbounded());
    switch.layout(Rect::new(100.0, 40.0, size.width, size.height));

    // Outside the laid-out bounds: ignored.
    let (down, _) = touch(0, 20.0);
    switch.event(&down);
    assert!(!switch.is_tracking());

    let (down, up) = (
        Event::TouchStart {
            id: TouchId(0),
            position: Point::new(110.0, 50.0),
            pressure: 1.0,
        },
        Event::TouchEnd {
            id: TouchId(0),
            position: Point::new(111.0, 50.0),
        },
    );
    switch.event(&down);
    assert!(switch.event(&up).is_some());
    assert!(switch.is_on());
    settle(&mut switch);
    assert_eq!(switch.geometry().thumb.right(), 149.0);
}

// =============================================================================
// Style and overlays
// =============================================================================

#[test]
fn test_negative_thumb_offset_clamped() {
    let mut switch = SevenSwitch::new();
    switch.set_thumb_offset(-3.0);
    assert_eq!(switch.style().thumb_offset, 0.0);
    assert_eq!(switch.geometry().thumb, Rect::new(0.0, 0.0, 30.0, 30.0));
}

#[test]
fn test_labels_clipped_to_uncovered_side() {
    let switch = SevenSwitch::new()
        .with_on_label(SwitchLabel::new("I"))
        .with_off_label(SwitchLabel::new("O"));
    let commands = paint(&switch);

    // Off at rest: the on-label has zero opacity and no room, only "O" draws.
    assert_eq!(commands.len(), 3);
    match &commands[2] {
        DrawCommand::Clip { bounds, child } => {
            assert_eq!(*bounds, Rect::new(29.0, 0.0, 21.0, 30.0));
            assert!(matches!(child.innermost(), DrawCommand::Text { content, .. } if content == "O"));
        }
        other => panic!("Expected clipped label, got {other:?}"),
    }
}

#[test]
fn test_images_cross_fade_mid_animation() {
    let mut switch = SevenSwitch::new()
        .with_on_image(ImageRef::new("on", Size::new(8.0, 8.0)))
        .with_off_image(ImageRef::new("off", Size::new(8.0, 8.0)));
    switch.set_on(true, true);
    switch.tick(0.05);

    let commands = paint(&switch);
    let alphas: Vec<f32> = commands[2..]
        .iter()
        .map(|c| match c {
            DrawCommand::Clip { child, .. } => match child.as_ref() {
                DrawCommand::Opacity { alpha, .. } => *alpha,
                other => panic!("Expected faded image, got {other:?}"),
            },
            other => panic!("Expected clipped image, got {other:?}"),
        })
        .collect();
    assert_eq!(alphas.len(), 2);
    assert!((alphas[0] + alphas[1] - 1.0).abs() < 1e-5);
}

#[test]
fn test_style_from_yaml_applies() {
    let style = SwitchStyle::from_yaml(
        r##"
on_tint_color: "#0000ff"
rounded: false
corner_radius: 4
"##,
    )
    .expect("valid yaml");
    let mut switch = SevenSwitch::new().with_style(style);
    switch.set_on(true, false);

    let commands = paint(&switch);
    match &commands[0] {
        DrawCommand::Rect { radius, style, .. } => {
            assert_eq!(radius.top_left, 4.0);
            assert_eq!(style.fill, Some(Color::rgb(0.0, 0.0, 1.0)));
        }
        other => panic!("Expected track Rect, got {other:?}"),
    }
}

#[test]
fn test_paint_output_serializes() {
    let switch = SevenSwitch::with_state(true).with_on_label(SwitchLabel::new("ON"));
    let json = serde_json::to_string(&paint(&switch)).expect("serializable");
    assert!(json.contains("\"ON\""));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_set_on_without_animation_reads_back(values in prop::collection::vec(any::<bool>(), 1..20)) {
        let mut switch = SevenSwitch::new();
        for v in values {
            switch.set_on(v, false);
            prop_assert_eq!(switch.is_on(), v);
        }
    }

    #[test]
    fn prop_tap_always_toggles(x in 0.5f32..49.5, jitter in -2.0f32..2.0, start in any::<bool>()) {
        let mut switch = SevenSwitch::with_state(start);
        let notes = drag(&mut switch, x, &[x + jitter]);
        prop_assert_eq!(switch.is_on(), !start);
        prop_assert_eq!(notes, vec![SwitchChanged { on: !start }]);
    }

    #[test]
    fn prop_drag_snaps_to_release_side(
        start in any::<bool>(),
        jitter in prop::collection::vec(-200.0f32..200.0, 0..8),
        end_fraction in 0.0f32..=1.0,
    ) {
        prop_assume!((end_fraction - 0.5).abs() > 0.01);
        let mut switch = SevenSwitch::with_state(start);
        let from = if start { 40.0 } else { 10.0 };
        let start_fraction = if start { 1.0 } else { 0.0 };
        // Grown thumb travels 15px on the default switch.
        let end = from + (end_fraction - start_fraction) * 15.0;
        // Make sure the gesture counts as a drag, not a tap.
        let mut path = vec![from + 100.0];
        path.extend(jitter.iter().map(|j| from + j));
        path.push(end);

        let notes = drag(&mut switch, from, &path);
        let expected = end_fraction > 0.5;
        prop_assert_eq!(switch.is_on(), expected);
        prop_assert_eq!(notes.len(), usize::from(expected != start));
    }

    #[test]
    fn prop_cancel_never_changes_value(start in any::<bool>(), moves in prop::collection::vec(-100.0f32..150.0, 0..6)) {
        let mut switch = SevenSwitch::with_state(start);
        switch.event(&Event::TouchStart { id: TouchId(9), position: Point::new(25.0, 15.0), pressure: 1.0 });
        for x in moves {
            let note = switch.event(&Event::TouchMove { id: TouchId(9), position: Point::new(x, 15.0), pressure: 1.0 });
            prop_assert!(note.is_none());
        }
        let note = switch.event(&Event::TouchCancel { id: TouchId(9) });
        prop_assert!(note.is_none());
        prop_assert_eq!(switch.is_on(), start);
    }

    #[test]
    fn prop_thumb_inside_inset_track(
        offset in -5.0f32..20.0,
        start in any::<bool>(),
        x in -50.0f32..100.0,
        frames in 0usize..30,
    ) {
        let mut switch = SevenSwitch::with_state(start).with_thumb_offset(offset);
        switch.event(&Event::TouchStart { id: TouchId(1), position: Point::new(25.0, 15.0), pressure: 1.0 });
        switch.event(&Event::TouchMove { id: TouchId(1), position: Point::new(x, 15.0), pressure: 1.0 });
        for _ in 0..frames {
            switch.tick(1.0 / 60.0);
        }
        let g = switch.geometry();
        let inset = switch.style().thumb_offset.min(15.0);
        prop_assert!(g.track.inset(inset).contains_rect(&g.thumb, 1e-3));
        prop_assert!((0.0..=1.0).contains(&switch.on_fraction()));
    }
}
