// SPDX-License-Identifier: MPL-2.0
//! User profile shape.

use crate::config::DEFAULT_API_ENDPOINT;
use serde::{Deserialize, Serialize};

/// The local user's display data and gallery backend location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    /// Reference (URL or data URI) to the avatar image, if any.
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Base URL of the gallery backend. Stored only; no requests are made here.
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
}

fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            profile_image: None,
            api_endpoint: default_api_endpoint(),
        }
    }
}
