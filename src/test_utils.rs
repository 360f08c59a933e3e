// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.

use crate::error::{Error, Result};
use crate::storage::{Bridge, KeyValueStore, MemoryStore};
use std::rc::Rc;

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A bridge over a fresh memory store, plus the store for inspection.
pub fn memory_bridge() -> (Rc<MemoryStore>, Bridge) {
    let memory = Rc::new(MemoryStore::new());
    let bridge = Bridge::new(memory.clone());
    (memory, bridge)
}

/// A bridge over a memory store pre-filled with `entries`.
pub fn seeded_bridge(entries: &[(&str, &str)]) -> (Rc<MemoryStore>, Bridge) {
    let memory = Rc::new(MemoryStore::with_entries(entries.iter().copied()));
    let bridge = Bridge::new(memory.clone());
    (memory, bridge)
}

/// A backend whose reads and writes always fail.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::Storage("unavailable".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Storage("quota exceeded".into()))
    }
}
