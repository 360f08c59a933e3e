// SPDX-License-Identifier: MPL-2.0
//! Embedded Fluent translation catalogs.

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// One Fluent bundle per embedded `.ftl` file, keyed by the file's locale.
pub struct Catalog {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
}

impl Catalog {
    /// Loads every embedded catalog. A file that fails to parse is logged
    /// and left out.
    #[must_use]
    pub fn load() -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(filename, "catalog file name is not a locale tag");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, errors)) => {
                    tracing::error!(filename, ?errors, "failed to parse catalog");
                    continue;
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::error!(filename, ?errors, "failed to add catalog resource");
                continue;
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(|locale| locale.to_string());

        Self {
            bundles,
            available_locales,
        }
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Finds the catalog serving `locale`: an exact match first, then one
    /// with the same language subtag (`de-AT` is served by `de`).
    #[must_use]
    pub fn resolve(&self, locale: &LanguageIdentifier) -> Option<&LanguageIdentifier> {
        if let Some((found, _)) = self.bundles.get_key_value(locale) {
            return Some(found);
        }
        self.available_locales
            .iter()
            .find(|candidate| candidate.language == locale.language)
    }

    /// Formats `key` from the catalog serving `locale`, if it has the message.
    #[must_use]
    pub fn format(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<String> {
        let bundle = self.bundles.get(self.resolve(locale)?)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            tracing::warn!(key, %locale, ?errors, "failed to format message");
            None
        }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("available_locales", &self.available_locales)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(tag: &str) -> LanguageIdentifier {
        tag.parse().expect("valid tag")
    }

    #[test]
    fn english_and_german_catalogs_are_embedded() {
        let catalog = Catalog::load();
        assert_eq!(catalog.available_locales(), &[id("de"), id("en")]);
    }

    #[test]
    fn regional_tags_resolve_to_language_catalog() {
        let catalog = Catalog::load();
        assert_eq!(catalog.resolve(&id("de-AT")), Some(&id("de")));
        assert_eq!(catalog.resolve(&id("en-US")), Some(&id("en")));
        assert_eq!(catalog.resolve(&id("fr")), None);
    }

    #[test]
    fn format_uses_requested_catalog() {
        let catalog = Catalog::load();
        assert_eq!(
            catalog.format(&id("de"), "settings-dark-mode", None).as_deref(),
            Some("Dunkelmodus")
        );
        assert_eq!(
            catalog.format(&id("en"), "settings-dark-mode", None).as_deref(),
            Some("Dark mode")
        );
    }

    #[test]
    fn format_with_arguments() {
        let catalog = Catalog::load();
        let mut args = FluentArgs::new();
        args.set("count", 3);
        assert_eq!(
            catalog
                .format(&id("en"), "collection-image-count", Some(&args))
                .as_deref(),
            Some("3 images")
        );
    }

    #[test]
    fn unknown_key_formats_to_none() {
        let catalog = Catalog::load();
        assert!(catalog.format(&id("en"), "no-such-key", None).is_none());
    }
}
