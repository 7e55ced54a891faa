//! TOML translation catalogs.
//!
//! A catalog file names its locale and maps English keys to translations:
//!
//! ```toml
//! locale = "de"
//!
//! [strings]
//! "Remove date" = "Datum entfernen"
//! ```

use std::{borrow::Cow, collections::BTreeMap, fs, path::Path};

use datechooser_core::Message;
use serde::Deserialize;

use crate::{I18nError, Localizer};

const BUILTIN: &[(&str, &str)] = &[
    ("de", include_str!("../locales/de.toml")),
    ("fr", include_str!("../locales/fr.toml")),
];

/// Translations for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    locale: String,
    #[serde(default)]
    strings: BTreeMap<String, String>,
}

impl Catalog {
    /// Creates a catalog without translations, which shows every key as-is.
    #[must_use]
    pub fn empty(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            strings: BTreeMap::new(),
        }
    }

    /// Parses a catalog from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Parse`] if the source is not a valid catalog.
    pub fn from_toml_str(source: &str) -> Result<Self, I18nError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Io`] if the file cannot be read and
    /// [`I18nError::Parse`] if its contents are not a valid catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, I18nError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&source)?;
        tracing::debug!(
            target: "datechooser::i18n",
            path = %path.display(),
            locale = %catalog.locale,
            entries = catalog.strings.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Returns the catalog shipped with the crate for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnknownLocale`] if no catalog ships for `locale`.
    pub fn builtin(locale: &str) -> Result<Self, I18nError> {
        let (_, source) = BUILTIN
            .iter()
            .find(|(tag, _)| tag.eq_ignore_ascii_case(locale))
            .ok_or_else(|| I18nError::UnknownLocale(locale.to_owned()))?;
        Self::from_toml_str(source)
    }

    /// The locale tag this catalog translates into.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Adds or replaces a translation.
    pub fn insert(&mut self, key: impl Into<String>, translation: impl Into<String>) {
        self.strings.insert(key.into(), translation.into());
    }

    /// Chooser messages this catalog has no translation for.
    #[must_use]
    pub fn missing(&self) -> Vec<Message> {
        Message::ALL
            .into_iter()
            .filter(|message| !self.strings.contains_key(message.key()))
            .collect()
    }
}

impl Localizer for Catalog {
    fn localize<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        self.strings
            .get(key)
            .map_or(Cow::Borrowed(key), |translation| Cow::Borrowed(translation.as_str()))
    }
}

/// A set of catalogs to choose from by locale.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    catalogs: Vec<Catalog>,
}

impl Catalogs {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            catalogs: Vec::new(),
        }
    }

    /// Every catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if a shipped catalog fails to parse.
    pub fn builtin() -> Result<Self, I18nError> {
        let catalogs = BUILTIN
            .iter()
            .map(|(_, source)| Catalog::from_toml_str(source))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { catalogs })
    }

    /// Adds a catalog. A later catalog for the same locale wins.
    pub fn push(&mut self, catalog: Catalog) {
        self.catalogs.retain(|existing| !same_tag(&existing.locale, &catalog.locale));
        self.catalogs.push(catalog);
    }

    /// Finds the catalog for `locale`.
    ///
    /// Tags compare case-insensitively with `_` and `-` treated alike. An
    /// exact match is preferred; otherwise a catalog for the bare language
    /// (`de` for `de-AT`) is used.
    #[must_use]
    pub fn select(&self, locale: &str) -> Option<&Catalog> {
        self.catalogs
            .iter()
            .find(|catalog| same_tag(&catalog.locale, locale))
            .or_else(|| {
                let language = language_of(locale);
                self.catalogs
                    .iter()
                    .find(|catalog| same_tag(&catalog.locale, language))
            })
    }

    /// The catalog for `locale`, or an empty one that shows English.
    #[must_use]
    pub fn localizer_for(&self, locale: &str) -> Catalog {
        self.select(locale).cloned().unwrap_or_else(|| {
            tracing::debug!(
                target: "datechooser::i18n",
                locale,
                "no catalog for locale, falling back to English"
            );
            Catalog::empty(locale)
        })
    }

    /// The catalog matching the platform locale.
    #[must_use]
    pub fn for_system(&self) -> Catalog {
        let locale = sys_locale::get_locale().unwrap_or_else(|| String::from("en"));
        self.localizer_for(&locale)
    }
}

fn language_of(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

fn same_tag(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a.bytes().zip(b.bytes()).all(|(x, y)| {
            let normalize = |c: u8| if c == b'_' { b'-' } else { c.to_ascii_lowercase() };
            normalize(x) == normalize(y)
        })
}
