//! Error types for switch style configuration.

use sevenswitch_core::ColorParseError;
use thiserror::Error;

/// Errors raised while loading or editing a [`SwitchStyle`](crate::SwitchStyle).
///
/// The widget itself never fails; these only surface at the configuration
/// boundary.
#[derive(Debug, Error)]
pub enum StyleError {
    /// YAML document could not be parsed or serialized.
    #[error("YAML style error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML document could not be parsed.
    #[error("TOML style error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A named color property was given an invalid hex value.
    #[error("invalid color for `{field}`: {source}")]
    Color {
        /// Property name
        field: String,
        /// Underlying parse failure
        #[source]
        source: ColorParseError,
    },

    /// No style property with this name exists.
    #[error("unknown style property `{0}`")]
    UnknownProperty(String),
}
