//! # Color
//!
//! The date chooser only needs flat sRGB tints: one per button role, one for
//! the title and one for the separator rules. [`Srgb`] stores those as 8-bit
//! channels and reads and writes the `#RRGGBB` notation hosts put in their
//! configuration files.

mod parse;
mod srgb;
pub use srgb::Srgb;

use core::fmt::{self, Display};

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexColorError {
    /// The provided string does not have the expected 6 hexadecimal digits.
    InvalidLength,
    /// A non-hexadecimal character was encountered at the provided index.
    InvalidDigit(usize),
}

impl Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => f.write_str("expected exactly 6 hexadecimal digits"),
            Self::InvalidDigit(index) => {
                write!(f, "invalid hexadecimal digit at byte index {index}")
            }
        }
    }
}

impl std::error::Error for HexColorError {}
