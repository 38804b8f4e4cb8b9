//! The SevenSwitch toggle widget.

use crate::layout::SwitchGeometry;
use crate::style::{non_negative, SwitchLabel, SwitchStyle};
use crate::tracking::{Gesture, Pointer};
use sevenswitch_core::{
    AccessibleRole, BoxStyle, Canvas, Color, Constraints, CornerRadius, EasedValue, Event,
    ImageRef, LayoutResult, MouseButton, Point, Rect, Shadow, Size, StrokeStyle, TypeId, Widget,
};
use std::any::Any;
use tracing::{debug, trace};

/// Length of the on/off transition, in seconds.
pub const ANIMATION_DURATION: f64 = 0.3;

/// Extra thumb width while a gesture is tracking.
pub const ACTIVE_THUMB_GROWTH: f32 = 5.0;

/// Preferred size when unconstrained.
pub const INTRINSIC_SIZE: Size = Size::new(50.0, 30.0);

/// Track border width.
pub const BORDER_WIDTH: f32 = 1.0;

const SHADOW_OPACITY: f32 = 0.5;
const SHADOW_OFFSET_Y: f32 = 3.0;
const SHADOW_BLUR: f32 = 2.0;

/// Message emitted when a user gesture changes the switch value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The new value
    pub on: bool,
}

/// Animated on/off switch with a draggable thumb.
///
/// # Examples
///
/// ```
/// use sevenswitch::SevenSwitch;
///
/// let mut switch = SevenSwitch::new();
/// switch.set_on(true, true);
/// assert!(switch.is_on());
/// assert!(switch.is_animating());
///
/// // The host advances the transition from its frame timer.
/// while switch.tick(1.0 / 60.0) {}
/// assert_eq!(switch.on_fraction(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SevenSwitch {
    on: bool,
    style: SwitchStyle,
    bounds: Rect,
    /// Visual on-fraction, 0.0 = off, 1.0 = on
    fraction: f32,
    /// Current extra thumb width
    growth: f32,
    fraction_anim: Option<EasedValue>,
    growth_anim: Option<EasedValue>,
    gesture: Option<Gesture>,
    needs_paint: bool,
    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
}

impl Default for SevenSwitch {
    fn default() -> Self {
        Self {
            on: false,
            style: SwitchStyle::default(),
            bounds: Rect::from_size(INTRINSIC_SIZE),
            fraction: 0.0,
            growth: 0.0,
            fraction_anim: None,
            growth_anim: None,
            gesture: None,
            needs_paint: true,
            accessible_name_value: None,
            test_id_value: None,
        }
    }
}

impl SevenSwitch {
    /// Create a new switch in the off state with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch with an initial value (no animation).
    #[must_use]
    pub fn with_state(on: bool) -> Self {
        let mut switch = Self::default();
        switch.set_on(on, false);
        switch
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Replace the whole style.
    #[must_use]
    pub fn with_style(mut self, style: SwitchStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Set the track color shown while off and touched.
    #[must_use]
    pub const fn with_active_color(mut self, color: Color) -> Self {
        self.style.active_color = color;
        self
    }

    /// Set the track color shown while off.
    #[must_use]
    pub const fn with_inactive_color(mut self, color: Color) -> Self {
        self.style.inactive_color = color;
        self
    }

    /// Set the track color shown while on.
    #[must_use]
    pub const fn with_on_tint_color(mut self, color: Color) -> Self {
        self.style.on_tint_color = color;
        self
    }

    /// Set the border color shown while off.
    #[must_use]
    pub const fn with_border_color(mut self, color: Color) -> Self {
        self.style.border_color = color;
        self
    }

    /// Set the thumb color while off.
    #[must_use]
    pub const fn with_thumb_tint_color(mut self, color: Color) -> Self {
        self.style.thumb_tint_color = color;
        self
    }

    /// Set the thumb color while on.
    #[must_use]
    pub const fn with_on_thumb_tint_color(mut self, color: Color) -> Self {
        self.style.on_thumb_tint_color = color;
        self
    }

    /// Set the thumb shadow color.
    #[must_use]
    pub const fn with_shadow_color(mut self, color: Color) -> Self {
        self.style.shadow_color = color;
        self
    }

    /// Set pill (true) or square (false) corners.
    #[must_use]
    pub const fn with_rounded(mut self, rounded: bool) -> Self {
        self.style.rounded = rounded;
        self
    }

    /// Set the square-style track corner radius. Negative values become 0.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.style.corner_radius = non_negative(radius);
        self
    }

    /// Set the thumb inset (and square thumb radius). Negative values become 0.
    #[must_use]
    pub fn with_thumb_offset(mut self, offset: f32) -> Self {
        self.style.thumb_offset = non_negative(offset);
        self
    }

    /// Set the image centered on the thumb.
    #[must_use]
    pub fn with_thumb_image(mut self, image: ImageRef) -> Self {
        self.style.thumb_image = Some(image);
        self
    }

    /// Set the image shown while on.
    #[must_use]
    pub fn with_on_image(mut self, image: ImageRef) -> Self {
        self.style.on_image = Some(image);
        self
    }

    /// Set the image shown while off.
    #[must_use]
    pub fn with_off_image(mut self, image: ImageRef) -> Self {
        self.style.off_image = Some(image);
        self
    }

    /// Set the label shown while on.
    #[must_use]
    pub fn with_on_label(mut self, label: SwitchLabel) -> Self {
        self.style.on_label = Some(label);
        self
    }

    /// Set the label shown while off.
    #[must_use]
    pub fn with_off_label(mut self, label: SwitchLabel) -> Self {
        self.style.off_label = Some(label);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // =========================================================================
    // Style setters
    // =========================================================================

    /// Current style.
    #[must_use]
    pub const fn style(&self) -> &SwitchStyle {
        &self.style
    }

    /// Replace the whole style. Lengths are clamped to be non-negative.
    pub fn set_style(&mut self, style: SwitchStyle) {
        self.style = style.sanitized();
        self.needs_paint = true;
    }

    /// Set the track color shown while off and touched.
    pub fn set_active_color(&mut self, color: Color) {
        self.style.active_color = color;
        self.needs_paint = true;
    }

    /// Set the track color shown while off.
    pub fn set_inactive_color(&mut self, color: Color) {
        self.style.inactive_color = color;
        self.needs_paint = true;
    }

    /// Set the track color shown while on.
    pub fn set_on_tint_color(&mut self, color: Color) {
        self.style.on_tint_color = color;
        self.needs_paint = true;
    }

    /// Set the border color shown while off.
    pub fn set_border_color(&mut self, color: Color) {
        self.style.border_color = color;
        self.needs_paint = true;
    }

    /// Set the thumb color while off.
    pub fn set_thumb_tint_color(&mut self, color: Color) {
        self.style.thumb_tint_color = color;
        self.needs_paint = true;
    }

    /// Set the thumb color while on.
    pub fn set_on_thumb_tint_color(&mut self, color: Color) {
        self.style.on_thumb_tint_color = color;
        self.needs_paint = true;
    }

    /// Set the thumb shadow color.
    pub fn set_shadow_color(&mut self, color: Color) {
        self.style.shadow_color = color;
        self.needs_paint = true;
    }

    /// Set pill (true) or square (false) corners.
    pub fn set_rounded(&mut self, rounded: bool) {
        self.style.rounded = rounded;
        self.needs_paint = true;
    }

    /// Set the square-style track corner radius. Negative values become 0.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.style.corner_radius = non_negative(radius);
        self.needs_paint = true;
    }

    /// Set the thumb inset (and square thumb radius). Negative values become 0.
    pub fn set_thumb_offset(&mut self, offset: f32) {
        self.style.thumb_offset = non_negative(offset);
        self.needs_paint = true;
    }

    /// Set or clear the thumb image.
    pub fn set_thumb_image(&mut self, image: Option<ImageRef>) {
        self.style.thumb_image = image;
        self.needs_paint = true;
    }

    /// Set or clear the on-state image.
    pub fn set_on_image(&mut self, image: Option<ImageRef>) {
        self.style.on_image = image;
        self.needs_paint = true;
    }

    /// Set or clear the off-state image.
    pub fn set_off_image(&mut self, image: Option<ImageRef>) {
        self.style.off_image = image;
        self.needs_paint = true;
    }

    /// Set or clear the on-state label.
    pub fn set_on_label(&mut self, label: Option<SwitchLabel>) {
        self.style.on_label = label;
        self.needs_paint = true;
    }

    /// Set or clear the off-state label.
    pub fn set_off_label(&mut self, label: Option<SwitchLabel>) {
        self.style.off_label = label;
        self.needs_paint = true;
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Get the current value.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Visual on-fraction: 0.0 with the thumb fully off, 1.0 fully on.
    #[must_use]
    pub const fn on_fraction(&self) -> f32 {
        self.fraction
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.gesture.is_some()
    }

    /// Whether a transition is still running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.fraction_anim.is_some() || self.growth_anim.is_some()
    }

    /// Whether something changed since the last [`take_needs_paint`](Self::take_needs_paint).
    #[must_use]
    pub const fn needs_paint(&self) -> bool {
        self.needs_paint
    }

    /// Return and clear the repaint flag.
    pub fn take_needs_paint(&mut self) -> bool {
        std::mem::take(&mut self.needs_paint)
    }

    /// Set the value, optionally animating the transition.
    ///
    /// Never emits [`SwitchChanged`]. Calling this during a gesture ends the
    /// gesture. An animation already in flight is replaced, starting from the
    /// current visual position.
    pub fn set_on(&mut self, on: bool, animated: bool) {
        if self.gesture.take().is_some() {
            trace!("programmatic set_on ended active gesture");
            self.animate_growth(0.0, animated);
        }
        if self.on != on {
            debug!(on, animated, "switch value set");
        }
        self.on = on;
        self.animate_fraction(if on { 1.0 } else { 0.0 }, animated);
    }

    /// Flip the value.
    pub fn toggle(&mut self, animated: bool) {
        self.set_on(!self.on, animated);
    }

    /// Advance running transitions by `dt` seconds.
    ///
    /// Returns true while anything is still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.is_animating() {
            return false;
        }
        if let Some(anim) = self.fraction_anim.as_mut() {
            anim.update(dt);
            if anim.is_complete() {
                self.fraction = anim.to as f32;
                self.fraction_anim = None;
            } else {
                self.fraction = anim.value() as f32;
            }
        }
        if let Some(anim) = self.growth_anim.as_mut() {
            anim.update(dt);
            if anim.is_complete() {
                self.growth = anim.to as f32;
                self.growth_anim = None;
            } else {
                self.growth = anim.value() as f32;
            }
        }
        self.needs_paint = true;
        if !self.is_animating() {
            trace!(fraction = self.fraction, "switch transition finished");
        }
        self.is_animating()
    }

    /// Geometry for the current visual state.
    #[must_use]
    pub fn geometry(&self) -> SwitchGeometry {
        SwitchGeometry::compute(self.bounds, self.fraction, self.growth, &self.style)
    }

    fn animate_fraction(&mut self, target: f32, animated: bool) {
        self.needs_paint = true;
        if !animated || (self.fraction - target).abs() < f32::EPSILON {
            self.fraction = target;
            self.fraction_anim = None;
            return;
        }
        self.fraction_anim = Some(EasedValue::new(
            f64::from(self.fraction),
            f64::from(target),
            ANIMATION_DURATION,
        ));
    }

    fn animate_growth(&mut self, target: f32, animated: bool) {
        self.needs_paint = true;
        if !animated || (self.growth - target).abs() < f32::EPSILON {
            self.growth = target;
            self.growth_anim = None;
            return;
        }
        self.growth_anim = Some(EasedValue::new(
            f64::from(self.growth),
            f64::from(target),
            ANIMATION_DURATION,
        ));
    }

    // =========================================================================
    // Gesture handling
    // =========================================================================

    fn begin_tracking(&mut self, pointer: Pointer, position: Point) {
        if self.gesture.is_some() || !self.bounds.contains_point(&position) {
            return;
        }
        trace!(?pointer, x = position.x, y = position.y, "switch tracking began");
        self.gesture = Some(Gesture::begin(pointer, position, self.fraction, self.on));
        // The finger owns the thumb from here on.
        self.fraction_anim = None;
        self.animate_growth(ACTIVE_THUMB_GROWTH, true);
    }

    fn continue_tracking(&mut self, pointer: Pointer, position: Point) {
        // Travel depends on the grown thumb, not the mid-animation one.
        let travel = SwitchGeometry::compute(
            self.bounds,
            self.fraction,
            ACTIVE_THUMB_GROWTH,
            &self.style,
        )
        .travel;
        let Some(gesture) = self.gesture.as_mut().filter(|g| g.pointer() == pointer) else {
            return;
        };
        self.fraction = gesture.drag_to(position, travel);
        self.fraction_anim = None;
        self.needs_paint = true;
    }

    /// Take the gesture if `pointer` owns it.
    fn take_gesture(&mut self, pointer: Pointer) -> Option<Gesture> {
        if self.gesture.as_ref().is_some_and(|g| g.pointer() == pointer) {
            self.gesture.take()
        } else {
            None
        }
    }

    fn end_tracking(&mut self, pointer: Pointer, position: Point) -> Option<SwitchChanged> {
        self.continue_tracking(pointer, position);
        let gesture = self.take_gesture(pointer)?;
        let resolved = gesture.resolve(self.fraction);
        debug!(
            kind = ?gesture.release_kind(),
            from = gesture.was_on(),
            to = resolved,
            "switch gesture resolved"
        );

        self.on = resolved;
        self.animate_growth(0.0, true);
        self.animate_fraction(if resolved { 1.0 } else { 0.0 }, true);

        (resolved != gesture.was_on()).then_some(SwitchChanged { on: resolved })
    }

    fn cancel_tracking(&mut self, pointer: Option<Pointer>) {
        let gesture = match pointer {
            Some(p) => self.take_gesture(p),
            None => self.gesture.take(),
        };
        let Some(gesture) = gesture else {
            return;
        };
        trace!(was_on = gesture.was_on(), "switch gesture cancelled");
        self.on = gesture.was_on();
        self.animate_growth(0.0, true);
        self.animate_fraction(if self.on { 1.0 } else { 0.0 }, true);
    }

    // =========================================================================
    // Painting
    // =========================================================================

    fn paint_track(&self, canvas: &mut dyn Canvas, g: &SwitchGeometry) {
        let tracking = self.gesture.is_some();
        let off_color = if tracking {
            self.style.active_color
        } else {
            self.style.inactive_color
        };
        let fill = off_color.lerp(&self.style.on_tint_color, self.fraction);

        let border_base = if tracking {
            self.style.active_color
        } else {
            self.style.border_color
        };
        let stroke = (self.fraction < 1.0).then(|| StrokeStyle {
            color: border_base.fade(1.0 - self.fraction),
            width: BORDER_WIDTH,
        });

        let style = BoxStyle {
            fill: Some(fill),
            stroke,
            shadow: None,
        };
        canvas.draw_box(
            g.track,
            CornerRadius::uniform(g.track_radius),
            &style,
        );
    }

    fn paint_thumb(&self, canvas: &mut dyn Canvas, g: &SwitchGeometry) {
        let color = self
            .style
            .thumb_tint_color
            .lerp(&self.style.on_thumb_tint_color, self.fraction);
        let shadow = Shadow {
            color: self.style.shadow_color.fade(SHADOW_OPACITY),
            offset_x: 0.0,
            offset_y: SHADOW_OFFSET_Y,
            blur: SHADOW_BLUR,
        };
        canvas.draw_box(
            g.thumb,
            CornerRadius::uniform(g.thumb_radius),
            &BoxStyle::fill(color).with_shadow(shadow),
        );
    }

    fn paint_images(&self, canvas: &mut dyn Canvas, g: &SwitchGeometry) {
        if let Some(image) = &self.style.thumb_image {
            canvas.draw_image(image, g.thumb.center_size(image.size));
            return;
        }
        if let Some(image) = &self.style.on_image {
            paint_overlay(canvas, g.on_clip, self.fraction, |c| {
                c.draw_image(image, g.on_region.center_size(image.size));
            });
        }
        if let Some(image) = &self.style.off_image {
            paint_overlay(canvas, g.off_clip, 1.0 - self.fraction, |c| {
                c.draw_image(image, g.off_region.center_size(image.size));
            });
        }
    }

    fn paint_labels(&self, canvas: &mut dyn Canvas, g: &SwitchGeometry) {
        if let Some(label) = &self.style.on_label {
            paint_overlay(canvas, g.on_clip, self.fraction, |c| {
                paint_label(c, label, g.on_region);
            });
        }
        if let Some(label) = &self.style.off_label {
            paint_overlay(canvas, g.off_clip, 1.0 - self.fraction, |c| {
                paint_label(c, label, g.off_region);
            });
        }
    }
}

/// Draw a side overlay clipped to `clip` at `opacity`.
fn paint_overlay(
    canvas: &mut dyn Canvas,
    clip: Rect,
    opacity: f32,
    draw: impl FnOnce(&mut dyn Canvas),
) {
    if opacity <= 0.0 || clip.width <= 0.0 {
        return;
    }
    canvas.push_clip(clip);
    canvas.push_opacity(opacity);
    draw(canvas);
    canvas.pop_opacity();
    canvas.pop_clip();
}

/// Center a label's text in `region`.
fn paint_label(canvas: &mut dyn Canvas, label: &SwitchLabel, region: Rect) {
    let size = Size::new(label.style.estimate_width(&label.text), label.style.size);
    let origin = region.center_size(size).origin();
    canvas.draw_text(&label.text, origin, &label.style);
}

impl Widget for SevenSwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(INTRINSIC_SIZE)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.needs_paint = true;
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let g = self.geometry();
        self.paint_track(canvas, &g);
        self.paint_thumb(canvas, &g);
        self.paint_images(canvas, &g);
        self.paint_labels(canvas, &g);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let changed = match event {
            Event::TouchStart { id, position, .. } => {
                self.begin_tracking(Pointer::Touch(*id), *position);
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                self.begin_tracking(Pointer::Mouse, *position);
                None
            }
            Event::TouchMove { id, position, .. } => {
                self.continue_tracking(Pointer::Touch(*id), *position);
                None
            }
            Event::MouseMove { position } => {
                self.continue_tracking(Pointer::Mouse, *position);
                None
            }
            Event::TouchEnd { id, position } => self.end_tracking(Pointer::Touch(*id), *position),
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => self.end_tracking(Pointer::Mouse, *position),
            Event::TouchCancel { id } => {
                self.cancel_tracking(Some(Pointer::Touch(*id)));
                None
            }
            Event::FocusOut => {
                self.cancel_tracking(None);
                None
            }
            // A mouse drag keeps tracking outside the bounds until release.
            Event::MouseLeave | Event::MouseDown { .. } | Event::MouseUp { .. } => None,
        };

        changed.map(|msg| Box::new(msg) as Box<dyn Any + Send>)
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref().or_else(|| {
            let label = if self.on {
                &self.style.on_label
            } else {
                &self.style.off_label
            };
            label.as_ref().map(|l| l.text.as_str())
        })
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
