//! Cosmetic options: tints, separator color, fonts and corner radius.
//!
//! None of these affect behavior; they are carried into the
//! [`ChooserLayout`](crate::ChooserLayout) for the backend to apply.

use datechooser_color::Srgb;

/// Font weight enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FontWeight {
    /// Light weight (300).
    Light,
    /// Normal weight (400).
    #[default]
    Normal,
    /// Medium weight (500).
    Medium,
    /// Semi-bold weight (600).
    SemiBold,
    /// Bold weight (700).
    Bold,
}

/// A system font at a given size and weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Font {
    /// Font size in points.
    pub size: f32,
    /// Font weight.
    pub weight: FontWeight,
}

impl Font {
    /// Creates a regular-weight system font of the given size.
    #[must_use]
    pub const fn system(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Normal,
        }
    }

    /// Returns this font with a different weight.
    #[must_use]
    pub const fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(17.0)
    }
}

/// Colors and fonts of a date chooser.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChooserStyle {
    /// Corner radius of the chooser's background, in points.
    pub corner_radius: f32,
    /// Color of the title showing the chosen moment.
    pub title_color: Srgb,
    /// Tint of the "Set to current" button.
    pub neutral_color: Srgb,
    /// Tint of the "Remove date" button.
    pub destructive_color: Srgb,
    /// Color of the rules separating the buttons.
    pub inner_border_color: Srgb,
    /// Accent tint of the mode switch and the "Save" button.
    pub tint_color: Srgb,
    /// Font of the title.
    pub title_font: Font,
    /// Font of every button.
    pub button_font: Font,
}

impl Default for ChooserStyle {
    fn default() -> Self {
        Self {
            corner_radius: 0.0,
            title_color: Srgb::BLACK,
            neutral_color: Srgb::DARK_GRAY,
            destructive_color: Srgb::RED,
            inner_border_color: Srgb::LIGHT_GRAY,
            tint_color: Srgb::SYSTEM_BLUE,
            title_font: Font::system(17.0),
            button_font: Font::system(16.0),
        }
    }
}
