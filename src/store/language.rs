// SPDX-License-Identifier: MPL-2.0
use super::PersistentStore;
use crate::domain::Language;
use crate::error::Result;
use crate::storage::{keys, Bridge};

pub type LanguageStore = PersistentStore<Language>;

impl PersistentStore<Language> {
    pub fn load(bridge: &Bridge) -> Self {
        Self::open(bridge, keys::LANGUAGE, Language::default)
    }

    pub fn set_language(&self, language: Language) {
        self.set(language);
    }

    /// Parses `tag` and sets it.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedLanguage`](crate::error::Error::UnsupportedLanguage)
    /// for anything but `en` or `de`; the store is left untouched.
    pub fn set_language_tag(&self, tag: &str) -> Result<()> {
        let language = tag.parse()?;
        self.set_language(language);
        Ok(())
    }
}
