// SPDX-License-Identifier: MPL-2.0
//! Image catalog entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form metadata attached to an image, keyed by name.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A single metadata value.
///
/// Serialized untagged so the stored JSON holds plain strings, arrays,
/// numbers and booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
    /// JSON `null`. Also what a non-finite number is stored as.
    Null,
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<Vec<String>> for MetadataValue {
    fn from(value: Vec<String>) -> Self {
        MetadataValue::List(value)
    }
}

/// NaN and the infinities have no JSON form and become [`MetadataValue::Null`].
impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            MetadataValue::Number(value)
        } else {
            MetadataValue::Null
        }
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Image {
    /// Returns a copy with the patch's fields applied.
    #[must_use]
    pub fn patched(&self, patch: &ImagePatch) -> Self {
        Self {
            id: self.id.clone(),
            url: patch.url.clone().unwrap_or_else(|| self.url.clone()),
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            metadata: patch
                .metadata
                .clone()
                .unwrap_or_else(|| self.metadata.clone()),
        }
    }

    /// Returns a copy with one metadata entry inserted or replaced.
    #[must_use]
    pub fn with_metadata(&self, key: &str, value: MetadataValue) -> Self {
        let mut metadata = self.metadata.clone();
        metadata.insert(key.to_string(), value);
        Self {
            metadata,
            ..self.clone()
        }
    }
}

/// Partial replacement for an [`Image`]. The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImagePatch {
    pub url: Option<String>,
    pub title: Option<String>,
    /// Replaces the whole metadata map.
    pub metadata: Option<Metadata>,
}

impl ImagePatch {
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.title.is_none() && self.metadata.is_none()
    }
}
