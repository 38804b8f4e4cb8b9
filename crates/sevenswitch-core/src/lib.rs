//! Core types and traits for the SevenSwitch widget.
//!
//! This crate provides the host-side primitives the switch drives:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`] with hex parsing and interpolation
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - Cooperative animation: [`EasedValue`] with [`ease_out`]
//! - Rendering: the [`Canvas`] trait, [`DrawCommand`] and [`RecordingCanvas`]

mod animation;
mod canvas;
mod color;
mod constraints;
mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{ease_out, EasedValue};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, ImageRef, Shadow, StrokeStyle};
pub use event::{Event, MouseButton, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
};
