// SPDX-License-Identifier: MPL-2.0
use super::{new_id, PersistentStore};
use crate::domain::{Image, ImagePatch, Metadata, MetadataValue};
use crate::storage::{keys, Bridge};

/// The image catalog, in insertion order.
pub type ImageStore = PersistentStore<Vec<Image>>;

impl PersistentStore<Vec<Image>> {
    pub fn load(bridge: &Bridge) -> Self {
        Self::open(bridge, keys::IMAGES, Vec::new)
    }

    /// Appends a new image and returns its generated id.
    pub fn add_image(
        &self,
        url: impl Into<String>,
        title: impl Into<String>,
        metadata: Metadata,
    ) -> String {
        let image = Image {
            id: new_id(),
            url: url.into(),
            title: title.into(),
            metadata,
        };
        let id = image.id.clone();
        self.update(|images| {
            let mut next = images.clone();
            next.push(image);
            Some(next)
        });
        id
    }

    /// Applies `patch` to the image with `id`. Unknown ids and empty
    /// patches are ignored.
    pub fn update_image(&self, id: &str, patch: ImagePatch) {
        if patch.is_empty() {
            return;
        }
        self.replace_image(id, |image| image.patched(&patch));
    }

    /// Inserts or replaces a single metadata entry, keeping the others.
    pub fn update_metadata_key(&self, id: &str, key: &str, value: impl Into<MetadataValue>) {
        let value = value.into();
        self.replace_image(id, |image| image.with_metadata(key, value));
    }

    /// Removes the image with `id`. Collections referencing it are left alone.
    pub fn remove_image(&self, id: &str) {
        self.update(|images| {
            if !images.iter().any(|image| image.id == id) {
                return None;
            }
            Some(images.iter().filter(|image| image.id != id).cloned().collect())
        });
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<Image> {
        self.get().iter().find(|image| image.id == id).cloned()
    }

    fn replace_image(&self, id: &str, f: impl FnOnce(&Image) -> Image) {
        let updated = self.update(|images| {
            let index = images.iter().position(|image| image.id == id)?;
            let mut next = images.clone();
            next[index] = f(&images[index]);
            Some(next)
        });
        if !updated {
            tracing::debug!(id, "no image with this id");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::memory_bridge;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn store() -> ImageStore {
        ImageStore::load(&Bridge::in_memory())
    }

    #[test]
    fn add_image_returns_unique_ids_and_appends() {
        let store = store();
        let ids: Vec<String> = (0..50)
            .map(|i| store.add_image(format!("https://example.org/{i}.jpg"), format!("#{i}"), Metadata::new()))
            .collect();

        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());

        let images = store.get();
        assert_eq!(images.len(), 50);
        assert_eq!(images.last().map(|image| image.id.as_str()), ids.last().map(String::as_str));
    }

    #[test]
    fn find_by_id_returns_exact_fields() {
        let store = store();
        let mut metadata = Metadata::new();
        metadata.insert("tags".into(), vec!["sea".to_string(), "boat".to_string()].into());
        let id = store.add_image("https://example.org/a.jpg", "Harbor", metadata.clone());

        let image = store.find_by_id(&id).expect("image exists");
        assert_eq!(
            image,
            Image {
                id,
                url: "https://example.org/a.jpg".into(),
                title: "Harbor".into(),
                metadata,
            }
        );
    }

    #[test]
    fn update_metadata_key_merges_with_existing_entries() {
        let store = store();
        let mut metadata = Metadata::new();
        metadata.insert("camera".into(), "X100V".into());
        metadata.insert("iso".into(), 200.0.into());
        let id = store.add_image("u", "t", metadata);

        store.update_metadata_key(&id, "iso", 800.0);
        store.update_metadata_key(&id, "favorite", true);

        let image = store.find_by_id(&id).expect("image exists");
        assert_eq!(image.metadata["iso"], MetadataValue::Number(800.0));
        assert_eq!(image.metadata["favorite"], MetadataValue::Bool(true));
        assert_eq!(image.metadata["camera"], MetadataValue::Text("X100V".into()));
    }

    #[test]
    fn update_image_patches_fields() {
        let store = store();
        let id = store.add_image("u", "old", Metadata::new());
        store.update_image(&id, ImagePatch::title("new"));
        assert_eq!(store.find_by_id(&id).map(|image| image.title), Some("new".to_string()));
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let store = store();
        let id = store.add_image("u", "t", Metadata::new());
        let before = store.get();
        store.update_image(&id, ImagePatch::default());
        assert!(Rc::ptr_eq(&before, &store.get()));
    }

    #[test]
    fn non_finite_metadata_survives_restart() {
        let (memory, bridge) = memory_bridge();
        let store = ImageStore::load(&bridge);
        let keep = store.add_image("a", "keep me", Metadata::new());
        let other = store.add_image("b", "b", Metadata::new());
        store.update_metadata_key(&other, "exposure", f64::NAN);

        let reopened = ImageStore::load(&Bridge::new(memory));
        assert_eq!(reopened.get().len(), 2);
        assert_eq!(reopened.find_by_id(&keep).map(|image| image.title), Some("keep me".to_string()));
        assert_eq!(
            reopened.find_by_id(&other).map(|image| image.metadata["exposure"].clone()),
            Some(MetadataValue::Null)
        );
        assert_eq!(*reopened.get(), *store.get());
    }

    #[test]
    fn remove_image_then_find_returns_none() {
        let store = store();
        let keep = store.add_image("a", "a", Metadata::new());
        let gone = store.add_image("b", "b", Metadata::new());

        store.remove_image(&gone);
        assert!(store.find_by_id(&gone).is_none());
        assert!(store.find_by_id(&keep).is_some());
    }

    #[test]
    fn operations_on_unknown_ids_change_nothing() {
        let store = store();
        store.add_image("a", "a", Metadata::new());
        let before = store.get();

        store.remove_image("missing");
        store.update_image("missing", ImagePatch::url("x"));
        store.update_metadata_key("missing", "k", "v");

        assert!(Rc::ptr_eq(&before, &store.get()));
    }
}
