//! Switch appearance configuration.
//!
//! [`SwitchStyle`] is the design-time surface of the switch: every color,
//! corner setting, overlay image and label lives here. It deserializes from
//! YAML or TOML with colors written as hex strings; any key left out keeps
//! its default.
//!
//! ```
//! use sevenswitch::SwitchStyle;
//!
//! let style = SwitchStyle::from_yaml(
//!     "on_tint_color: \"#007aff\"\nrounded: false\ncorner_radius: 4.0\n",
//! )
//! .expect("valid style");
//! assert!(!style.rounded);
//! assert_eq!(style.corner_radius(), 4.0);
//! ```

use crate::error::StyleError;
use serde::{Deserialize, Serialize};
use sevenswitch_core::{Color, ImageRef, TextStyle};

/// Text overlay shown on one side of the track.
///
/// The label is centered in the track area beside the resting thumb and
/// clipped so it never overlaps the moving one. Centering uses
/// [`TextStyle::estimate_width`] (0.6 em per character), not real font
/// metrics, and the text is not scaled to fill the area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchLabel {
    /// Label text
    pub text: String,
    /// Font and color
    #[serde(default)]
    pub style: TextStyle,
}

impl SwitchLabel {
    /// Create a label with the default text style.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Set the text style.
    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// All style properties of a switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchStyle {
    /// Track background while off and being touched
    pub active_color: Color,
    /// Track background while off
    pub inactive_color: Color,
    /// Track background while on
    pub on_tint_color: Color,
    /// Track border while off
    pub border_color: Color,
    /// Thumb color while off
    pub thumb_tint_color: Color,
    /// Thumb color while on
    pub on_thumb_tint_color: Color,
    /// Thumb drop shadow color
    pub shadow_color: Color,
    /// Pill-shaped track; set false for a square switch
    pub rounded: bool,
    /// Track corner radius, used only when not rounded
    pub corner_radius: f32,
    /// Gap between track and thumb; also the square thumb's corner radius
    pub thumb_offset: f32,
    /// Image centered on the thumb
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_image: Option<ImageRef>,
    /// Image shown in the uncovered track area while on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_image: Option<ImageRef>,
    /// Image shown in the uncovered track area while off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_image: Option<ImageRef>,
    /// Text shown in the uncovered track area while on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_label: Option<SwitchLabel>,
    /// Text shown in the uncovered track area while off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_label: Option<SwitchLabel>,
}

impl Default for SwitchStyle {
    fn default() -> Self {
        Self {
            active_color: Color::rgb(0.89, 0.89, 0.89),
            inactive_color: Color::TRANSPARENT,
            on_tint_color: Color::rgb(0.3, 0.85, 0.39),
            border_color: Color::rgb(0.78, 0.78, 0.8),
            thumb_tint_color: Color::WHITE,
            on_thumb_tint_color: Color::WHITE,
            shadow_color: Color::GRAY,
            rounded: true,
            corner_radius: 2.0,
            thumb_offset: 1.0,
            thumb_image: None,
            on_image: None,
            off_image: None,
            on_label: None,
            off_label: None,
        }
    }
}

/// Clamp a length to a finite, non-negative value.
pub(crate) fn non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

impl SwitchStyle {
    /// Load a style from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Yaml`] for malformed YAML or invalid colors.
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        let style: Self = serde_yaml_ng::from_str(source)?;
        Ok(style.sanitized())
    }

    /// Load a style from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Toml`] for malformed TOML or invalid colors.
    pub fn from_toml(source: &str) -> Result<Self, StyleError> {
        let style: Self = toml::from_str(source)?;
        Ok(style.sanitized())
    }

    /// Serialize the style to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Yaml`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, StyleError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Clamp negative or non-finite lengths to zero.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.corner_radius = non_negative(self.corner_radius);
        self.thumb_offset = non_negative(self.thumb_offset);
        self
    }

    /// Effective track corner radius (never negative).
    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        non_negative(self.corner_radius)
    }

    /// Effective thumb offset (never negative).
    #[must_use]
    pub fn thumb_offset(&self) -> f32 {
        non_negative(self.thumb_offset)
    }

    /// Set a color property by name from a hex string, the way a property
    /// inspector would.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownProperty`] for names that are not color
    /// properties and [`StyleError::Color`] for invalid hex values.
    pub fn set_color(&mut self, name: &str, hex: &str) -> Result<(), StyleError> {
        let slot = match name {
            "active_color" => &mut self.active_color,
            "inactive_color" => &mut self.inactive_color,
            "on_tint_color" => &mut self.on_tint_color,
            "border_color" => &mut self.border_color,
            "thumb_tint_color" => &mut self.thumb_tint_color,
            "on_thumb_tint_color" => &mut self.on_thumb_tint_color,
            "shadow_color" => &mut self.shadow_color,
            _ => return Err(StyleError::UnknownProperty(name.to_string())),
        };
        *slot = Color::from_hex(hex).map_err(|source| StyleError::Color {
            field: name.to_string(),
            source,
        })?;
        Ok(())
    }
}
