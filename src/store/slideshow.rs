// SPDX-License-Identifier: MPL-2.0
use super::PersistentStore;
use crate::domain::{SlideshowSettings, Transition};
use crate::storage::{keys, Bridge};

pub type SlideshowStore = PersistentStore<SlideshowSettings>;

impl PersistentStore<SlideshowSettings> {
    pub fn load(bridge: &Bridge) -> Self {
        Self::open(bridge, keys::SLIDESHOW_SETTINGS, SlideshowSettings::default)
    }

    /// Restores and persists the default value.
    pub fn reset(&self) {
        self.restore_default();
    }

    /// Selects the collection to play. The id is not validated.
    pub fn set_collection(&self, collection_id: Option<String>) {
        self.update(|settings| {
            Some(SlideshowSettings {
                collection_id,
                ..settings.clone()
            })
        });
    }

    /// Sets the seconds per slide. Zero and negative values are accepted;
    /// NaN and the infinities cannot be stored and are ignored.
    pub fn set_interval(&self, seconds: f64) {
        if !seconds.is_finite() {
            tracing::warn!(seconds, "ignoring non-finite slideshow interval");
            return;
        }
        self.update(|settings| {
            Some(SlideshowSettings {
                interval: seconds,
                ..settings.clone()
            })
        });
    }

    pub fn set_transition(&self, transition: Transition) {
        self.update(|settings| {
            Some(SlideshowSettings {
                transition,
                ..settings.clone()
            })
        });
    }

    pub fn set_random_order(&self, random_order: bool) {
        self.update(|settings| {
            Some(SlideshowSettings {
                random_order,
                ..settings.clone()
            })
        });
    }
}
