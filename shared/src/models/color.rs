//! Menu block color themes

use serde::{Deserialize, Serialize};

/// Color theme applied to a menu block
///
/// Serialized as the lowercase theme key the backend stores
/// (`menu_colorScheme` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    White,
    Yellow,
    Orange,
    Red,
    Pink,
    Purple,
    Blue,
    Sky,
    Green,
    Lime,
    /// Placeholder theme used for empty cells; not offered in the editor
    Transparent,
}

impl ColorScheme {
    /// Themes offered as editor swatches, in display order
    pub fn selectable() -> &'static [ColorScheme] {
        &[
            ColorScheme::White,
            ColorScheme::Yellow,
            ColorScheme::Orange,
            ColorScheme::Red,
            ColorScheme::Pink,
            ColorScheme::Purple,
            ColorScheme::Blue,
            ColorScheme::Sky,
            ColorScheme::Green,
            ColorScheme::Lime,
        ]
    }
}
