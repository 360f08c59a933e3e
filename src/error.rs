// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Store operations never surface these: storage and parse failures are logged
//! where they happen. They are returned by configuration loading, the storage
//! backends themselves, and explicit validation such as
//! [`LanguageStore::set_language_tag`](crate::store::LanguageStore).

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// Stored text could not be encoded or decoded.
    #[error("Serialization Error: {0}")]
    Serialization(String),

    /// The key-value backend rejected a key or is unavailable.
    #[error("Storage Error: {0}")]
    Storage(String),

    /// A language tag outside the supported set.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn json_error_maps_to_serialization() {
        let json_error = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn unsupported_language_mentions_tag() {
        let err = Error::UnsupportedLanguage("fr".into());
        assert_eq!(format!("{}", err), "Unsupported language: fr");
    }
}
