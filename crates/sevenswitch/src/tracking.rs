//! Touch and mouse gesture tracking.
//!
//! A [`Gesture`] exists only while a finger (or the left mouse button) is
//! down on the switch. It remembers where the gesture started and what the
//! value was, follows the pointer horizontally, and on release decides
//! whether the gesture was a tap or a drag.

use sevenswitch_core::{Point, TouchId};

/// Drags shorter than this (in pixels, measured from the touch-down point)
/// count as taps.
pub const TAP_THRESHOLD: f32 = 5.0;

/// Which pointer owns the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    /// Left mouse button
    Mouse,
    /// A specific touch
    Touch(TouchId),
}

/// How a finished gesture resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Short tap: flip the value the gesture started with.
    Tap,
    /// Drag: snap to the side nearest the thumb.
    Drag,
}

/// An in-progress gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    pointer: Pointer,
    start: Point,
    start_fraction: f32,
    was_on: bool,
    max_distance: f32,
}

impl Gesture {
    /// Begin tracking at `start` with the thumb at `start_fraction`.
    #[must_use]
    pub fn begin(pointer: Pointer, start: Point, start_fraction: f32, was_on: bool) -> Self {
        Self {
            pointer,
            start,
            start_fraction: start_fraction.clamp(0.0, 1.0),
            was_on,
            max_distance: 0.0,
        }
    }

    /// Pointer that owns this gesture.
    #[must_use]
    pub const fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Value before the gesture began.
    #[must_use]
    pub const fn was_on(&self) -> bool {
        self.was_on
    }

    /// Furthest the pointer has strayed from the touch-down point.
    #[must_use]
    pub const fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Record a pointer position and return the on-fraction that puts the
    /// thumb under the finger, given the thumb's current `travel`.
    pub fn drag_to(&mut self, position: Point, travel: f32) -> f32 {
        self.max_distance = self.max_distance.max(self.start.distance(&position));
        if travel <= 0.0 {
            return self.start_fraction;
        }
        let dx = position.x - self.start.x;
        (self.start_fraction + dx / travel).clamp(0.0, 1.0)
    }

    /// Classify the gesture once the pointer lifts.
    #[must_use]
    pub fn release_kind(&self) -> Release {
        if self.max_distance < TAP_THRESHOLD {
            Release::Tap
        } else {
            Release::Drag
        }
    }

    /// Final value for a gesture ending with the thumb at `fraction`.
    #[must_use]
    pub fn resolve(&self, fraction: f32) -> bool {
        match self.release_kind() {
            Release::Tap => !self.was_on,
            Release::Drag => fraction > 0.5,
        }
    }
}
