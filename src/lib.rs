// SPDX-License-Identifier: MPL-2.0
//! `antgallery` holds the client-side state of a photo gallery: the user
//! profile, image catalog, collections, slideshow settings and display
//! preferences.
//!
//! Every piece of state lives in an observable store that persists itself
//! to a key-value backend, and the localization layer follows the language
//! store. Rendering, routing and the gallery's HTTP API live elsewhere and
//! consume this crate through store subscriptions.
//!
//! ```no_run
//! use antgallery::app::App;
//! use antgallery::config;
//!
//! let (config, _warning) = config::load();
//! let app = App::from_config(&config);
//!
//! let _sub = app.dark_mode.subscribe(|dark| println!("dark mode: {dark}"));
//! app.dark_mode.toggle();
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod i18n;
pub mod storage;
pub mod store;

#[cfg(test)]
mod test_utils;
