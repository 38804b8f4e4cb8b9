//! Track and thumb geometry.
//!
//! Everything the painter and the gesture tracker need to know about where
//! things sit is computed here, as a pure function of the widget bounds, the
//! on-fraction, the tracking growth and the style.

use crate::style::SwitchStyle;
use sevenswitch_core::Rect;

/// Resolved geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchGeometry {
    /// Track (background) rectangle
    pub track: Rect,
    /// Track corner radius
    pub track_radius: f32,
    /// Track inset by the effective thumb offset; the thumb never leaves it
    pub inner: Rect,
    /// Thumb rectangle at the current fraction
    pub thumb: Rect,
    /// Thumb corner radius
    pub thumb_radius: f32,
    /// Track area left of the resting on-state thumb
    pub on_region: Rect,
    /// Track area right of the resting off-state thumb
    pub off_region: Rect,
    /// Track area left of the current thumb
    pub on_clip: Rect,
    /// Track area right of the current thumb
    pub off_clip: Rect,
    /// Horizontal distance the thumb covers between off and on
    pub travel: f32,
}

impl SwitchGeometry {
    /// Compute geometry for `bounds` at on-fraction `fraction` (clamped to
    /// [0, 1]) with the thumb widened by `growth`.
    #[must_use]
    pub fn compute(bounds: Rect, fraction: f32, growth: f32, style: &SwitchStyle) -> Self {
        let track = Rect::new(
            bounds.x,
            bounds.y,
            bounds.width.max(0.0),
            bounds.height.max(0.0),
        );
        let half_extent = track.height.min(track.width) / 2.0;
        let offset = style.thumb_offset().min(half_extent);
        let inner = track.inset(offset);

        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let growth = if growth.is_finite() {
            growth.max(0.0)
        } else {
            0.0
        };

        let thumb_height = inner.height;
        let resting_width = thumb_height.min(inner.width);
        let thumb_width = (thumb_height + growth).min(inner.width);
        let travel = (inner.width - thumb_width).max(0.0);
        let thumb = Rect::new(
            travel.mul_add(fraction, inner.x),
            inner.y,
            thumb_width,
            thumb_height,
        );

        let track_radius = if style.rounded {
            track.height / 2.0
        } else {
            style.corner_radius().min(half_extent)
        };
        let thumb_radius = if style.rounded {
            thumb_height.min(thumb_width) / 2.0
        } else {
            offset.min(thumb_height / 2.0)
        };

        let on_thumb_left = inner.right() - resting_width;
        let off_thumb_right = inner.x + resting_width;
        let on_region = Rect::new(
            track.x,
            track.y,
            (on_thumb_left - offset - track.x).max(0.0),
            track.height,
        );
        let off_region_left = off_thumb_right + offset;
        let off_region = Rect::new(
            off_region_left,
            track.y,
            (track.right() - off_region_left).max(0.0),
            track.height,
        );

        let on_clip = Rect::new(
            track.x,
            track.y,
            (thumb.x - track.x).max(0.0),
            track.height,
        );
        let off_clip = Rect::new(
            thumb.right(),
            track.y,
            (track.right() - thumb.right()).max(0.0),
            track.height,
        );

        Self {
            track,
            track_radius,
            inner,
            thumb,
            thumb_radius,
            on_region,
            off_region,
            on_clip,
            off_clip,
            travel,
        }
    }
}
