//! Draw commands for rendering backends.
//!
//! All rendering reduces to these primitives.

use crate::widget::TextStyle;
use crate::{Color, CornerRadius, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Stroke style for outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Box style for rectangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
    /// Shadow (None = no shadow)
    pub shadow: Option<Shadow>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: None,
            shadow: None,
        }
    }
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            shadow: None,
        }
    }

    /// Add a shadow to the box.
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

/// Shadow configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::rgba(0.0, 0.0, 0.0, 0.3),
            offset_x: 0.0,
            offset_y: 2.0,
            blur: 4.0,
        }
    }
}

/// Handle to an image the backend knows how to draw.
///
/// The widget layer never decodes pixels; `source` is whatever key the
/// backend resolves (asset name, path, atlas id) and `size` is the natural
/// size used for centering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Backend-resolved image key
    pub source: String,
    /// Natural size in pixels
    pub size: Size,
}

impl ImageRef {
    /// Create an image handle.
    #[must_use]
    pub fn new(source: impl Into<String>, size: Size) -> Self {
        Self {
            source: source.into(),
            size,
        }
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Position
        position: Point,
        /// Text style
        style: TextStyle,
    },

    /// Draw an image
    Image {
        /// Image handle
        image: ImageRef,
        /// Destination bounds
        bounds: Rect,
    },

    /// Clip to bounds
    Clip {
        /// Clip bounds
        bounds: Rect,
        /// Child command
        child: Box<DrawCommand>,
    },

    /// Apply opacity
    Opacity {
        /// Alpha value (0.0 - 1.0)
        alpha: f32,
        /// Child command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    /// Wrap with opacity. Fully opaque commands are returned unchanged.
    #[must_use]
    pub fn with_opacity(self, alpha: f32) -> Self {
        if alpha >= 1.0 {
            return self;
        }
        Self::Opacity {
            alpha: alpha.max(0.0),
            child: Box::new(self),
        }
    }

    /// Wrap with clip bounds.
    #[must_use]
    pub fn with_clip(self, bounds: Rect) -> Self {
        Self::Clip {
            bounds,
            child: Box::new(self),
        }
    }

    /// Strip clip and opacity wrappers, returning the innermost command.
    #[must_use]
    pub fn innermost(&self) -> &Self {
        match self {
            Self::Clip { child, .. } | Self::Opacity { child, .. } => child.innermost(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_style_builders() {
        let style = BoxStyle::fill(Color::WHITE).with_shadow(Shadow::default());
        assert_eq!(style.fill, Some(Color::WHITE));
        assert!(style.stroke.is_none());
        assert!(style.shadow.is_some());
        assert_eq!(StrokeStyle::default().width, 1.0);
    }

    fn pill(bounds: Rect) -> DrawCommand {
        DrawCommand::Rect {
            bounds,
            radius: CornerRadius::uniform(bounds.height / 2.0),
            style: BoxStyle::fill(Color::WHITE),
        }
    }

    #[test]
    fn test_with_opacity_skips_opaque() {
        let cmd = pill(Rect::new(0.0, 0.0, 50.0, 30.0));
        assert_eq!(cmd.clone().with_opacity(1.0), cmd);
        assert!(matches!(
            cmd.with_opacity(0.5),
            DrawCommand::Opacity { alpha, .. } if (alpha - 0.5).abs() < f32::EPSILON
        ));
    }

    #[test]
    fn test_innermost_unwraps_nesting() {
        let base = pill(Rect::new(1.0, 1.0, 28.0, 28.0));
        let wrapped = base
            .clone()
            .with_opacity(0.5)
            .with_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(wrapped.innermost(), &base);
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::Image {
            image: ImageRef::new("check", Size::new(12.0, 12.0)),
            bounds: Rect::new(0.0, 0.0, 12.0, 12.0),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"check\""));
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
