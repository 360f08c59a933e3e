// SPDX-License-Identifier: MPL-2.0
//! Stores mirrored to the key-value bridge.

use super::observable::{Observable, Subscription};
use crate::storage::{Bridge, Loaded, Persist};
use std::fmt;
use std::rc::Rc;

/// An [`Observable`] whose every value is written to one storage key.
///
/// The write happens in a subscriber registered before any other, so it
/// runs ahead of every other subscriber on each change, and once at
/// construction to seed (or heal) the stored entry.
pub struct PersistentStore<T> {
    cell: Observable<T>,
    key: &'static str,
    default: Rc<dyn Fn() -> T>,
}

impl<T> Clone for PersistentStore<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            key: self.key,
            default: Rc::clone(&self.default),
        }
    }
}

impl<T: Persist + 'static> PersistentStore<T> {
    /// Opens the store under `key`.
    ///
    /// Uses the stored value if it decodes, `default()` otherwise. A stored
    /// value that fails to decode is logged and overwritten with the default.
    pub fn open(bridge: &Bridge, key: &'static str, default: impl Fn() -> T + 'static) -> Self {
        let initial = match bridge.load_value::<T>(key) {
            Loaded::Value(value) => value,
            Loaded::Absent => default(),
            Loaded::Corrupt(error) => {
                tracing::warn!(key, %error, "stored value is corrupt, restoring default");
                default()
            }
        };

        let cell = Observable::new(initial);
        let writer = bridge.clone();
        let _persistence: Subscription =
            cell.subscribe(move |value: &Rc<T>| writer.save_value(key, value.as_ref()));

        Self {
            cell,
            key,
            default: Rc::new(default),
        }
    }

    /// Storage key this store writes to.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn get(&self) -> Rc<T> {
        self.cell.get()
    }

    /// See [`Observable::subscribe`].
    pub fn subscribe(&self, callback: impl FnMut(&Rc<T>) + 'static) -> Subscription {
        self.cell.subscribe(callback)
    }

    /// Persists and publishes `value`.
    pub(crate) fn set(&self, value: T) {
        self.cell.set(value);
    }

    /// Persists and publishes the value computed by `f`, unless it returns `None`.
    pub(crate) fn update(&self, f: impl FnOnce(&T) -> Option<T>) -> bool {
        self.cell.update(f)
    }

    /// Restores the default value.
    pub(crate) fn restore_default(&self) {
        self.set((self.default)());
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentStore")
            .field("key", &self.key)
            .field("cell", &self.cell)
            .finish()
    }
}
