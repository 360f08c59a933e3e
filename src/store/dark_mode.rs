// SPDX-License-Identifier: MPL-2.0
use super::PersistentStore;
use crate::storage::{keys, Bridge};

/// `true` when the dark color scheme is active.
pub type DarkModeStore = PersistentStore<bool>;

impl PersistentStore<bool> {
    /// Opens the store. Without a stored value, `prefers_dark` (the host's
    /// color-scheme preference) becomes the initial value.
    pub fn load(bridge: &Bridge, prefers_dark: bool) -> Self {
        Self::open(bridge, keys::DARK_MODE, move || prefers_dark)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        *self.get()
    }

    pub fn toggle(&self) {
        self.update(|enabled| Some(!enabled));
    }

    pub fn enable(&self) {
        self.set(true);
    }

    pub fn disable(&self) {
        self.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{memory_bridge, seeded_bridge};

    #[test]
    fn initial_value_follows_host_preference() {
        assert!(DarkModeStore::load(&Bridge::in_memory(), true).is_enabled());
        assert!(!DarkModeStore::load(&Bridge::in_memory(), false).is_enabled());
    }

    #[test]
    fn stored_value_overrides_host_preference() {
        let (_, bridge) = seeded_bridge(&[(keys::DARK_MODE, "false")]);
        let store = DarkModeStore::load(&bridge, true);
        assert!(!store.is_enabled());
    }

    #[test]
    fn toggle_enable_disable() {
        let (memory, bridge) = memory_bridge();
        let store = DarkModeStore::load(&bridge, false);

        store.toggle();
        assert!(store.is_enabled());
        store.toggle();
        assert!(!store.is_enabled());
        store.enable();
        assert!(store.is_enabled());
        assert_eq!(memory.entry(keys::DARK_MODE).as_deref(), Some("true"));
        store.disable();
        assert_eq!(memory.entry(keys::DARK_MODE).as_deref(), Some("false"));
    }
}
