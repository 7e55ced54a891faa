//! # Date Chooser Core
//!
//! The presentation logic behind the date chooser widget, free of any view
//! toolkit. A [`Capabilities`] set goes in, a [`Resolution`] comes out: which
//! optional sections are shown, which axis the wheel edits, how the chosen
//! moment is rendered, and which label the "set to current" action carries.
//!
//! ```
//! use datechooser_core::{Capabilities, DateStyle, PickerMode, TimeStyle, resolve};
//!
//! let resolution = resolve(Capabilities::TIME_ONLY | Capabilities::REMOVE_DATE);
//! assert_eq!(resolution.picker_mode, PickerMode::TimeOnly);
//! assert_eq!(resolution.formatter.date_style, DateStyle::None);
//! assert_eq!(resolution.formatter.time_style, TimeStyle::Short);
//! assert!(resolution.sections.remove_date);
//! ```
//!
//! Rendering a moment is delegated to a [`MomentFormatter`]; the
//! [`StandardFormatter`] covers en-US conventions with the `time` crate.

mod capabilities;
pub use capabilities::Capabilities;
pub mod format;
pub use format::{FormatError, MomentFormatter, StandardFormatter};
mod message;
pub use message::Message;
mod mode;
pub use mode::{DateStyle, FormatterConfig, PickerMode, TimeStyle};
mod resolve;
pub use resolve::{Resolution, VisibleSections, resolve};

pub use time;
