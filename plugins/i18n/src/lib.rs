//! # Date Chooser i18n
//!
//! Translations for the handful of strings the date chooser shows. A message
//! is looked up by its English text, so anything a catalog lacks falls back
//! to readable English instead of an opaque identifier.
//!
//! ```
//! use datechooser_core::Message;
//! use datechooser_i18n::{Catalog, Localizer};
//!
//! let catalog = Catalog::builtin("de").unwrap();
//! assert_eq!(catalog.message(Message::Save), "Sichern");
//! ```

use std::{borrow::Cow, fmt::Debug};

use datechooser_core::Message;

mod catalog;
pub use catalog::{Catalog, Catalogs};
mod error;
pub use error::I18nError;

/// A service that translates user-visible strings.
pub trait Localizer: Debug {
    /// Translates `key`, returning the key itself when no translation exists.
    fn localize<'a>(&'a self, key: &'a str) -> Cow<'a, str>;

    /// Translates a chooser [`Message`].
    fn message(&self, message: Message) -> Cow<'_, str> {
        self.localize(message.key())
    }
}

impl<L: Localizer + ?Sized> Localizer for Box<L> {
    fn localize<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        (**self).localize(key)
    }
}

/// Shows every message in English.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl Localizer for Passthrough {
    fn localize<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_returns_english() {
        for message in Message::ALL {
            assert_eq!(Passthrough.message(message), message.key());
        }
    }

    #[test]
    fn boxed_localizer_delegates() {
        let boxed: Box<dyn Localizer> = Box::new(Catalog::builtin("fr").unwrap());
        assert_eq!(boxed.message(Message::TimeSegment), "Heure");
    }
}
