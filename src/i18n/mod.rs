// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) bootstrap.
//!
//! [`Localization`] decides the active locale at startup and then follows
//! the [`LanguageStore`](crate::store::LanguageStore) for the rest of the
//! process.
//!
//! # Initial Locale
//!
//! 1. The persisted `language` entry, as stored
//! 2. The host's preferred locale
//! 3. `en`
//!
//! The fallback locale is always `en`. Subscribing to the language store
//! delivers its current value right away, so the store's language takes
//! over as soon as initialization completes.

pub mod fluent;

use crate::config::{DEFAULT_LOCALE, FALLBACK_LOCALE};
use crate::domain::Language;
use crate::host::Host;
use crate::storage::{keys, Bridge};
use crate::store::{LanguageStore, Subscription};
use fluent::Catalog;
use fluent_bundle::FluentArgs;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use unic_langid::LanguageIdentifier;

/// Active and fallback locale of the translation system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleState {
    pub active: LanguageIdentifier,
    pub fallback: LanguageIdentifier,
}

pub struct Localization {
    catalog: Rc<Catalog>,
    state: Rc<RefCell<LocaleState>>,
    subscription: Option<Subscription>,
}

impl Localization {
    /// Configures the initial locale and starts following `language`.
    pub fn initialize(language: &LanguageStore, bridge: &Bridge, host: &dyn Host) -> Self {
        let catalog = Rc::new(Catalog::load());
        let fallback = parse_or_default(FALLBACK_LOCALE);

        let requested = bridge
            .load(keys::LANGUAGE)
            .or_else(|| host.preferred_locale())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let active = parse_or_default(&requested);
        tracing::debug!(%active, %fallback, "initializing localization");

        let state = Rc::new(RefCell::new(LocaleState { active, fallback }));

        let follower = Rc::clone(&state);
        let subscription = language.subscribe(move |language: &Rc<Language>| {
            let active = locale_for(**language);
            let mut state = follower.borrow_mut();
            if state.active != active {
                tracing::debug!(from = %state.active, to = %active, "switching locale");
                state.active = active;
            }
        });

        Self {
            catalog,
            state,
            subscription: Some(subscription),
        }
    }

    #[must_use]
    pub fn active_locale(&self) -> LanguageIdentifier {
        self.state.borrow().active.clone()
    }

    #[must_use]
    pub fn fallback_locale(&self) -> LanguageIdentifier {
        self.state.borrow().fallback.clone()
    }

    #[must_use]
    pub fn state(&self) -> LocaleState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Translates `key` in the active locale, falling back to the fallback
    /// locale, then to a `MISSING: <key>` marker.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.translate(key, None)
    }

    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &FluentArgs) -> String {
        self.translate(key, Some(args))
    }

    fn translate(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let state = self.state.borrow();
        self.catalog
            .format(&state.active, key, args)
            .or_else(|| self.catalog.format(&state.fallback, key, args))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }
}

impl Drop for Localization {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl fmt::Debug for Localization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localization")
            .field("state", &self.state.borrow())
            .field("catalog", &self.catalog)
            .finish()
    }
}

fn locale_for(language: Language) -> LanguageIdentifier {
    parse_or_default(language.as_str())
}

fn parse_or_default(tag: &str) -> LanguageIdentifier {
    tag.parse()
        .or_else(|_| {
            tracing::debug!(tag, "unparseable locale tag, using default");
            DEFAULT_LOCALE.parse::<LanguageIdentifier>()
        })
        .unwrap_or_default()
}
