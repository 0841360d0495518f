//! Error type shared by the configuration and rendering crates.

use thiserror::Error;

/// Errors raised while configuring a display.
///
/// Out-of-range character codes and text that does not fit the grid are never
/// errors; they are clamped or blank-filled by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LcdError {
    /// A geometry or spacing field received an out-of-domain value.
    ///
    /// Carries the field name: `lines`, `charsPerLine`, `dotSpacing` or
    /// `letterSpacing`.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A numeric style code outside the seven built-in styles.
    #[error("unsupported dot matrix style: {0}")]
    UnsupportedStyle(i32),

    /// A style name that does not match any built-in style.
    #[error("unsupported dot matrix style: {0:?}")]
    UnsupportedStyleName(String),
}

pub type Result<T, E = LcdError> = std::result::Result<T, E>;
