// SPDX-License-Identifier: MPL-2.0
//! Ordered image collections.

use serde::{Deserialize, Serialize};

/// A named, ordered selection of image ids.
///
/// `image_ids` are not checked against the image catalog; readers must
/// tolerate ids whose image has been removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_ids: Vec<String>,
    /// Creation time, milliseconds since the Unix epoch.
    pub created: i64,
    /// Last modification time, milliseconds since the Unix epoch.
    pub updated: i64,
}

impl Collection {
    #[must_use]
    pub fn contains(&self, image_id: &str) -> bool {
        self.image_ids.iter().any(|id| id == image_id)
    }

    /// Returns a copy with the patch applied and `updated` refreshed.
    #[must_use]
    pub fn patched(&self, patch: &CollectionPatch, now: i64) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            image_ids: patch
                .image_ids
                .clone()
                .unwrap_or_else(|| self.image_ids.clone()),
            created: self.created,
            updated: self.touch(now),
        }
    }

    /// Returns a copy holding `image_ids` with `updated` refreshed.
    #[must_use]
    pub fn with_image_ids(&self, image_ids: Vec<String>, now: i64) -> Self {
        Self {
            image_ids,
            updated: self.touch(now),
            ..self.clone()
        }
    }

    /// The next `updated` value. Never earlier than the current one, even
    /// if the wall clock stepped backwards.
    fn touch(&self, now: i64) -> i64 {
        now.max(self.updated)
    }
}

/// Partial replacement for a [`Collection`]. `id` and `created` are fixed;
/// `updated` is always refreshed by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_ids: Option<Vec<String>>,
}
