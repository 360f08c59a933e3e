// SPDX-License-Identifier: MPL-2.0
use super::{new_id, now_millis, PersistentStore};
use crate::domain::{Collection, CollectionPatch};
use crate::storage::{keys, Bridge};

/// Image collections, in creation order.
///
/// Image ids are never checked against the [`ImageStore`](super::ImageStore);
/// dangling ids are kept as they are.
pub type CollectionStore = PersistentStore<Vec<Collection>>;

impl PersistentStore<Vec<Collection>> {
    pub fn load(bridge: &Bridge) -> Self {
        Self::open(bridge, keys::COLLECTIONS, Vec::new)
    }

    /// Creates an empty collection and returns its id.
    pub fn add_collection(&self, name: impl Into<String>, description: impl Into<String>) -> String {
        let now = now_millis();
        let collection = Collection {
            id: new_id(),
            name: name.into(),
            description: description.into(),
            image_ids: Vec::new(),
            created: now,
            updated: now,
        };
        let id = collection.id.clone();
        self.update(|collections| {
            let mut next = collections.clone();
            next.push(collection);
            Some(next)
        });
        id
    }

    /// Applies `patch` and refreshes `updated`, even for an empty patch.
    pub fn update_collection(&self, id: &str, patch: CollectionPatch) {
        let now = now_millis();
        self.modify(id, |collection| Some(collection.patched(&patch, now)));
    }

    /// Appends `image_id` unless the collection already holds it.
    pub fn add_image_to_collection(&self, collection_id: &str, image_id: &str) {
        let now = now_millis();
        self.modify(collection_id, |collection| {
            if collection.contains(image_id) {
                return None;
            }
            let mut image_ids = collection.image_ids.clone();
            image_ids.push(image_id.to_string());
            Some(collection.with_image_ids(image_ids, now))
        });
    }

    /// Drops every occurrence of `image_id`; `updated` is refreshed either way.
    pub fn remove_image_from_collection(&self, collection_id: &str, image_id: &str) {
        let now = now_millis();
        self.modify(collection_id, |collection| {
            let image_ids = collection
                .image_ids
                .iter()
                .filter(|id| *id != image_id)
                .cloned()
                .collect();
            Some(collection.with_image_ids(image_ids, now))
        });
    }

    /// Replaces the image order wholesale with `order`.
    pub fn reorder_images(&self, collection_id: &str, order: Vec<String>) {
        let now = now_millis();
        self.modify(collection_id, |collection| {
            Some(collection.with_image_ids(order, now))
        });
    }

    pub fn remove_collection(&self, id: &str) {
        self.update(|collections| {
            if !collections.iter().any(|collection| collection.id == id) {
                return None;
            }
            Some(
                collections
                    .iter()
                    .filter(|collection| collection.id != id)
                    .cloned()
                    .collect(),
            )
        });
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<Collection> {
        self.get()
            .iter()
            .find(|collection| collection.id == id)
            .cloned()
    }

    /// Replaces the collection with `id` by `f`'s result. `None` from `f`,
    /// or an unknown id, leaves the store untouched.
    fn modify(&self, id: &str, f: impl FnOnce(&Collection) -> Option<Collection>) {
        self.update(|collections| {
            let index = collections.iter().position(|collection| collection.id == id)?;
            let replacement = f(&collections[index])?;
            let mut next = collections.clone();
            next[index] = replacement;
            Some(next)
        });
    }
}
