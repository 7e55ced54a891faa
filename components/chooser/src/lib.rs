//! # Date Chooser Widget
//!
//! A composite date/time picker: a title showing the chosen moment, an
//! optional segmented date/time switch, a wheel, and optional "Remove date",
//! "Set to current" and "Save" actions.
//!
//! [`DateChooser`] holds the state and reacts to [`ChooserEvent`]s from the
//! native controls. [`DateChooser::layout`] describes what to draw as a
//! [`ChooserLayout`], which any toolkit backend can render.

mod chooser;
pub use chooser::{ChooserEvent, DateChooser, Segment};
pub mod clock;
pub use clock::{Clock, ManualClock, SystemClock};
pub mod config;
pub use config::{ConfigError, DateChooserConfig, MinuteInterval};
pub mod layout;
pub use layout::{ButtonRole, ChooserLayout, Section, SectionId, SectionKind};
pub mod style;
pub use style::{ChooserStyle, Font, FontWeight};

#[cfg(test)]
mod tests;
