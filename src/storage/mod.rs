// SPDX-License-Identifier: MPL-2.0
//! Persistent key-value bridge.
//!
//! Every store loads its initial value from, and writes each new value to,
//! one string entry of a [`KeyValueStore`]. The [`Bridge`] wraps the backend
//! and owns the failure policy: backend errors are logged and never reach
//! the stores' callers.
//!
//! # Backends
//!
//! - [`FileStore`]: one file per key, the persistent backend
//! - [`MemoryStore`]: process-local map
//! - [`DisabledStore`]: no storage capability at all

mod file;
mod memory;

pub use file::FileStore;
pub use memory::{DisabledStore, MemoryStore};

use crate::domain::{Collection, Image, Language, SlideshowSettings, UserProfile};
use crate::error::{Error, Result};
use std::fmt;
use std::rc::Rc;

/// Storage keys, one per persisted store.
pub mod keys {
    pub const USER_PROFILE: &str = "userProfile";
    pub const IMAGES: &str = "images";
    pub const COLLECTIONS: &str = "collections";
    pub const SLIDESHOW_SETTINGS: &str = "slideshowSettings";
    pub const LANGUAGE: &str = "language";
    pub const DARK_MODE: &str = "darkMode";
}

/// A string-keyed text storage backend.
pub trait KeyValueStore {
    /// Returns the stored text for `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous entry.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Whether this backend stores anything at all.
    fn is_available(&self) -> bool {
        true
    }
}

/// Conversion between a store value and its stored text.
pub trait Persist: Sized {
    fn encode(&self) -> Result<String>;
    fn decode(raw: &str) -> Result<Self>;
}

macro_rules! persist_as_json {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Persist for $ty {
                fn encode(&self) -> Result<String> {
                    Ok(serde_json::to_string(self)?)
                }

                fn decode(raw: &str) -> Result<Self> {
                    Ok(serde_json::from_str(raw)?)
                }
            }
        )+
    };
}

persist_as_json!(UserProfile, SlideshowSettings, Vec<Image>, Vec<Collection>);

/// Stored as the bare tag, e.g. `de`.
impl Persist for Language {
    fn encode(&self) -> Result<String> {
        Ok(self.as_str().to_string())
    }

    fn decode(raw: &str) -> Result<Self> {
        raw.parse()
    }
}

/// Stored as `true` / `false`.
impl Persist for bool {
    fn encode(&self) -> Result<String> {
        Ok(self.to_string())
    }

    fn decode(raw: &str) -> Result<Self> {
        raw.parse()
            .map_err(|_| Error::Serialization(format!("expected true or false, got {raw:?}")))
    }
}

/// Result of reading one entry through the bridge.
#[derive(Debug, PartialEq)]
pub enum Loaded<T> {
    /// Nothing stored, or the backend could not be read.
    Absent,
    Value(T),
    /// Text was stored but did not decode.
    Corrupt(Error),
}

/// Shared handle to the key-value backend.
#[derive(Clone)]
pub struct Bridge {
    backend: Rc<dyn KeyValueStore>,
}

impl Bridge {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// A bridge over [`DisabledStore`].
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Rc::new(DisabledStore))
    }

    /// A bridge over a fresh [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::new()))
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Reads the raw text stored under `key`. Backend errors read as absent.
    pub fn load(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::error!(key, %error, "failed to read from storage");
                None
            }
        }
    }

    /// Writes raw text under `key`. Backend errors are logged and dropped.
    pub fn save(&self, key: &str, value: &str) {
        if let Err(error) = self.backend.set(key, value) {
            tracing::error!(key, %error, "failed to write to storage");
        }
    }

    /// Reads and decodes the entry under `key`.
    pub fn load_value<T: Persist>(&self, key: &str) -> Loaded<T> {
        match self.load(key) {
            None => Loaded::Absent,
            Some(raw) => match T::decode(&raw) {
                Ok(value) => Loaded::Value(value),
                Err(error) => Loaded::Corrupt(error),
            },
        }
    }

    /// Encodes and writes `value` under `key`.
    pub fn save_value<T: Persist>(&self, key: &str, value: &T) {
        match value.encode() {
            Ok(raw) => self.save(key, &raw),
            Err(error) => tracing::error!(key, %error, "failed to encode value for storage"),
        }
    }
}

impl fmt::Debug for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("available", &self.is_available())
            .finish()
    }
}
