// SPDX-License-Identifier: MPL-2.0
//! Domain layer - plain data shapes shared by every store.
//!
//! These types carry no behavior beyond construction and structural updates.
//! They serialize with camelCase field names so persisted entries stay
//! readable by other clients of the same storage.
//!
//! # Modules
//!
//! - [`profile`]: [`UserProfile`](profile::UserProfile)
//! - [`image`]: [`Image`](image::Image), [`MetadataValue`](image::MetadataValue),
//!   [`ImagePatch`](image::ImagePatch)
//! - [`collection`]: [`Collection`](collection::Collection),
//!   [`CollectionPatch`](collection::CollectionPatch)
//! - [`slideshow`]: [`SlideshowSettings`](slideshow::SlideshowSettings),
//!   [`Transition`](slideshow::Transition)
//! - [`language`]: [`Language`](language::Language)

pub mod collection;
pub mod image;
pub mod language;
pub mod profile;
pub mod slideshow;

pub use collection::{Collection, CollectionPatch};
pub use image::{Image, ImagePatch, Metadata, MetadataValue};
pub use language::Language;
pub use profile::UserProfile;
pub use slideshow::{SlideshowSettings, Transition};
