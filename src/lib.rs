#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod debug;

pub use datechooser_color as color;
pub use datechooser_core as presentation;
pub use datechooser_i18n as i18n;
pub use datechooser_widget as widget;

pub mod prelude {
    //! A collection of commonly used traits and types for easy importing.
    //!
    //! ```rust
    //! use datechooser::prelude::*;
    //!
    //! let saved: Binding<Option<OffsetDateTime>> = binding(None::<OffsetDateTime>);
    //! let chooser = date_chooser(&saved);
    //! assert_eq!(chooser.resolution().picker_mode, PickerMode::DateOnly);
    //! ```
    pub use super::date_chooser;
    pub use crate::color::Srgb;
    pub use crate::i18n::{Catalog, Catalogs, Localizer, Passthrough};
    pub use crate::presentation::{
        Capabilities, DateStyle, FormatterConfig, Message, MomentFormatter, PickerMode,
        Resolution, StandardFormatter, TimeStyle, VisibleSections, resolve,
    };
    pub use crate::widget::{
        ButtonRole, ChooserEvent, ChooserLayout, ChooserStyle, Clock, DateChooser,
        DateChooserConfig, Font, FontWeight, MinuteInterval, Section, SectionId, SectionKind,
        Segment, SystemClock,
    };
    pub use nami::{Binding, Signal, binding};
    pub use time::OffsetDateTime;
}

pub use nami as reactive;
pub use time;
pub use tracing as log;

use nami::Binding;
use time::OffsetDateTime;
use widget::DateChooser;

/// Creates a [`DateChooser`] with the standard capabilities that saves into `saved`.
/// See [`DateChooser`] for more details.
#[must_use]
pub fn date_chooser(saved: &Binding<Option<OffsetDateTime>>) -> DateChooser {
    DateChooser::new(saved)
}
