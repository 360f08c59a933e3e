// SPDX-License-Identifier: MPL-2.0
//! Entity stores.
//!
//! Each store owns one value, exposes `get`/`subscribe`, and offers named
//! mutations. A mutation builds a new value from the current snapshot,
//! installs it, writes it through the [`Bridge`](crate::storage::Bridge)
//! and then notifies subscribers, all before returning.
//!
//! | Store | Value | Storage key |
//! |---|---|---|
//! | [`UserProfileStore`] | [`UserProfile`](crate::domain::UserProfile) | `userProfile` |
//! | [`ImageStore`] | `Vec<Image>` | `images` |
//! | [`CollectionStore`] | `Vec<Collection>` | `collections` |
//! | [`SlideshowStore`] | [`SlideshowSettings`](crate::domain::SlideshowSettings) | `slideshowSettings` |
//! | [`LanguageStore`] | [`Language`](crate::domain::Language) | `language` |
//! | [`DarkModeStore`] | `bool` | `darkMode` |

mod collections;
mod dark_mode;
mod images;
mod language;
mod observable;
mod persisted;
mod profile;
mod slideshow;

pub use collections::CollectionStore;
pub use dark_mode::DarkModeStore;
pub use images::ImageStore;
pub use language::LanguageStore;
pub use observable::{Observable, Subscription};
pub use persisted::PersistentStore;
pub use profile::UserProfileStore;
pub use slideshow::SlideshowStore;

/// Fresh identifier for a new image or collection.
fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time in milliseconds since the Unix epoch.
fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
