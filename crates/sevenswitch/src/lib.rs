//! SevenSwitch: an animated on/off switch with a draggable thumb.
//!
//! The widget is host-agnostic. The host feeds it [`Event`]s, lays it out
//! through the [`Widget`] trait, advances animations with
//! [`SevenSwitch::tick`], and paints it into any [`Canvas`]. User gestures
//! that change the value come back from [`Widget::event`] as a boxed
//! [`SwitchChanged`].
//!
//! ```
//! use sevenswitch::{Event, Point, SevenSwitch, SwitchChanged, TouchId, Widget};
//!
//! let mut switch = SevenSwitch::new();
//! switch.event(&Event::TouchStart {
//!     id: TouchId(0),
//!     position: Point::new(10.0, 15.0),
//!     pressure: 1.0,
//! });
//! let msg = switch.event(&Event::TouchEnd {
//!     id: TouchId(0),
//!     position: Point::new(10.0, 15.0),
//! });
//! let changed = msg.and_then(|m| m.downcast::<SwitchChanged>().ok());
//! assert_eq!(changed.map(|c| c.on), Some(true));
//! ```

mod error;
mod layout;
mod style;
mod switch;
mod tracking;

pub use error::StyleError;
pub use layout::SwitchGeometry;
pub use style::{SwitchLabel, SwitchStyle};
pub use switch::{
    SevenSwitch, SwitchChanged, ACTIVE_THUMB_GROWTH, ANIMATION_DURATION, BORDER_WIDTH,
    INTRINSIC_SIZE,
};
pub use tracking::{Gesture, Pointer, Release, TAP_THRESHOLD};

pub use sevenswitch_core::{
    BoxStyle, Canvas, Color, ColorParseError, Constraints, DrawCommand, Event, ImageRef, MouseButton,
    Point, RecordingCanvas, Rect, Size, TextStyle, TouchId, Widget,
};
