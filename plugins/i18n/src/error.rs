use std::{io, path::PathBuf};

/// Errors raised while loading translation catalogs.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum I18nError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The catalog is not valid TOML or lacks required fields.
    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),
    /// No catalog ships with the crate for this locale.
    #[error("no built-in catalog for locale `{0}`")]
    UnknownLocale(String),
}
