// SPDX-License-Identifier: MPL-2.0
//! Slideshow playback settings.

use crate::config::DEFAULT_SLIDESHOW_INTERVAL_SECS;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Transition effect between two slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    #[default]
    Fade,
    Slide,
    Zoom,
    Flip,
    /// Pick one of the other transitions for every slide.
    Random,
}

impl Transition {
    pub const ALL: [Transition; 5] = [
        Transition::Fade,
        Transition::Slide,
        Transition::Zoom,
        Transition::Flip,
        Transition::Random,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Transition::Fade => "fade",
            Transition::Slide => "slide",
            Transition::Zoom => "zoom",
            Transition::Flip => "flip",
            Transition::Random => "random",
        }
    }

    /// Message key for the transition's display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Transition::Fade => "slideshow-transition-fade",
            Transition::Slide => "slideshow-transition-slide",
            Transition::Zoom => "slideshow-transition-zoom",
            Transition::Flip => "slideshow-transition-flip",
            Transition::Random => "slideshow-transition-random",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for the slideshow view. None of the fields are validated:
/// the interval may be zero or negative and `collection_id` may be dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideshowSettings {
    pub collection_id: Option<String>,
    /// Seconds each slide stays on screen. A stored `null` reads as the default.
    #[serde(deserialize_with = "interval_or_default")]
    pub interval: f64,
    pub transition: Transition,
    pub random_order: bool,
}

impl Default for SlideshowSettings {
    fn default() -> Self {
        Self {
            collection_id: None,
            interval: DEFAULT_SLIDESHOW_INTERVAL_SECS,
            transition: Transition::default(),
            random_order: false,
        }
    }
}

fn interval_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_SLIDESHOW_INTERVAL_SECS))
}
