use core::{fmt, str::FromStr};

use crate::{
    HexColorError,
    parse::{parse_hex, parse_hex_const},
};

/// A color in the sRGB color space with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srgb {
    /// Red channel (0-255)
    pub red: u8,
    /// Green channel (0-255)
    pub green: u8,
    /// Blue channel (0-255)
    pub blue: u8,
}

impl Srgb {
    /// Black color.
    pub const BLACK: Self = Self::from_hex("#000000");
    /// White color.
    pub const WHITE: Self = Self::from_hex("#FFFFFF");
    /// Dark gray (one third white), the default neutral tint.
    pub const DARK_GRAY: Self = Self::from_hex("#555555");
    /// Light gray (two thirds white), the default separator color.
    pub const LIGHT_GRAY: Self = Self::from_hex("#AAAAAA");
    /// Pure red, the default destructive tint.
    pub const RED: Self = Self::from_hex("#FF0000");
    /// System blue, the default accent tint.
    pub const SYSTEM_BLUE: Self = Self::from_hex("#007AFF");

    /// Creates a new sRGB color from 8-bit red, green, and blue channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a new sRGB color from a hexadecimal color string.
    ///
    /// Intended for constants: invalid input panics, which fails the build in
    /// a `const` context.
    ///
    /// # Arguments
    /// * `hex` - Hex color string (e.g., "#FF5722" or "0xFF5722")
    #[must_use]
    pub const fn from_hex(hex: &str) -> Self {
        let [red, green, blue] = parse_hex_const(hex);
        Self::new(red, green, blue)
    }

    /// Attempts to create a new sRGB color from a hexadecimal string without panicking.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly six hexadecimal digits
    /// or contains invalid characters.
    pub const fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        match parse_hex(hex) {
            Ok([red, green, blue]) => Ok(Self::new(red, green, blue)),
            Err(err) => Err(err),
        }
    }

    /// Returns the `#RRGGBB` notation of this color.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Channels scaled to `0.0..=1.0`, as most renderers expect.
    #[must_use]
    pub fn components(self) -> [f32; 3] {
        [self.red, self.green, self.blue].map(|channel| f32::from(channel) / 255.0)
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Srgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s.trim())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Srgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Srgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl serde::de::Visitor<'_> for HexVisitor {
            type Value = Srgb;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a color in #RRGGBB notation")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Srgb, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}
