// SPDX-License-Identifier: MPL-2.0
//! Application root.
//!
//! [`App`] owns every store and the localization state. Nothing here is a
//! process-wide singleton: UI code receives the `App` (or clones of the
//! individual store handles) from whoever created it.
//!
//! # Startup Order
//!
//! 1. Pick the storage backend and the host (see [`App::from_config`])
//! 2. Open each store, reading its persisted entry or seeding the default
//! 3. Initialize localization and attach it to the language store

pub mod paths;

use crate::config::{Config, StorageBackend, StorageConfig};
use crate::host::{HeadlessHost, Host, SystemHost};
use crate::i18n::Localization;
use crate::storage::{Bridge, DisabledStore, FileStore, MemoryStore};
use crate::store::{
    CollectionStore, DarkModeStore, ImageStore, LanguageStore, SlideshowStore, UserProfileStore,
};
use std::rc::Rc;

#[derive(Debug)]
pub struct App {
    pub user_profile: UserProfileStore,
    pub images: ImageStore,
    pub collections: CollectionStore,
    pub slideshow: SlideshowStore,
    pub language: LanguageStore,
    pub dark_mode: DarkModeStore,
    pub localization: Localization,
    bridge: Bridge,
}

impl App {
    /// Opens every store on `bridge` and bootstraps localization.
    ///
    /// Host preferences are only consulted when the host is interactive.
    pub fn new(bridge: Bridge, host: &dyn Host) -> Self {
        let prefers_dark = host.is_interactive() && host.prefers_dark();

        let user_profile = UserProfileStore::load(&bridge);
        let images = ImageStore::load(&bridge);
        let collections = CollectionStore::load(&bridge);
        let slideshow = SlideshowStore::load(&bridge);
        let language = LanguageStore::load(&bridge);
        let dark_mode = DarkModeStore::load(&bridge, prefers_dark);
        let localization = Localization::initialize(&language, &bridge, host);

        tracing::debug!(
            storage = bridge.is_available(),
            images = images.get().len(),
            collections = collections.get().len(),
            "application state loaded"
        );

        Self {
            user_profile,
            images,
            collections,
            slideshow,
            language,
            dark_mode,
            localization,
            bridge,
        }
    }

    /// Builds the application from a loaded configuration.
    ///
    /// The `disabled` backend runs without a user session, so host
    /// preferences are ignored as well.
    pub fn from_config(config: &Config) -> Self {
        let bridge = open_bridge(&config.storage);
        match config.storage.backend {
            StorageBackend::Disabled => Self::new(bridge, &HeadlessHost),
            StorageBackend::File | StorageBackend::Memory => {
                let host = SystemHost::with_locale_override(config.general.locale.clone());
                Self::new(bridge, &host)
            }
        }
    }

    #[must_use]
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }
}

/// Creates the bridge for the configured backend.
///
/// Falls back to the disabled backend if no data directory can be found.
pub fn open_bridge(storage: &StorageConfig) -> Bridge {
    match storage.backend {
        StorageBackend::File => {
            match paths::get_storage_dir_with_override(storage.data_dir.clone()) {
                Some(dir) => {
                    tracing::debug!(dir = %dir.display(), "using file storage");
                    Bridge::new(Rc::new(FileStore::new(dir)))
                }
                None => {
                    tracing::warn!("no data directory available, state will not be persisted");
                    Bridge::new(Rc::new(DisabledStore))
                }
            }
        }
        StorageBackend::Memory => Bridge::new(Rc::new(MemoryStore::new())),
        StorageBackend::Disabled => Bridge::new(Rc::new(DisabledStore)),
    }
}
