// SPDX-License-Identifier: MPL-2.0
use super::PersistentStore;
use crate::domain::UserProfile;
use crate::storage::{keys, Bridge};

pub type UserProfileStore = PersistentStore<UserProfile>;

impl PersistentStore<UserProfile> {
    /// Opens the profile store, healing a corrupt entry with the default profile.
    pub fn load(bridge: &Bridge) -> Self {
        Self::open(bridge, keys::USER_PROFILE, UserProfile::default)
    }

    /// Restores and persists the default value.
    pub fn reset(&self) {
        self.restore_default();
    }

    pub fn update_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.update(|profile| {
            Some(UserProfile {
                name,
                ..profile.clone()
            })
        });
    }

    pub fn update_profile_image(&self, image: Option<String>) {
        self.update(|profile| {
            Some(UserProfile {
                profile_image: image,
                ..profile.clone()
            })
        });
    }

    pub fn update_api_endpoint(&self, endpoint: impl Into<String>) {
        let api_endpoint = endpoint.into();
        self.update(|profile| {
            Some(UserProfile {
                api_endpoint,
                ..profile.clone()
            })
        });
    }
}
