// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Profile**: Gallery backend endpoint
//! - **Slideshow**: Slide interval
//! - **Locale**: Initial and fallback locale tags

// ==========================================================================
// Profile Defaults
// ==========================================================================

/// Gallery backend endpoint used until the user configures another one.
pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:17017/v0/";

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Seconds each slide is shown.
pub const DEFAULT_SLIDESHOW_INTERVAL_SECS: f64 = 5.0;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither storage nor the host provides one.
pub const DEFAULT_LOCALE: &str = "en";

/// Locale whose catalog answers keys missing from the active one.
pub const FALLBACK_LOCALE: &str = "en";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SLIDESHOW_INTERVAL_SECS > 0.0);
    assert!(!DEFAULT_API_ENDPOINT.is_empty());
    assert!(!FALLBACK_LOCALE.is_empty());
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_endpoint_is_versioned_localhost_url() {
        assert!(DEFAULT_API_ENDPOINT.starts_with("http://localhost:"));
        assert!(DEFAULT_API_ENDPOINT.ends_with("/v0/"));
    }

    #[test]
    fn locale_defaults_are_english() {
        assert_eq!(DEFAULT_LOCALE, "en");
        assert_eq!(FALLBACK_LOCALE, "en");
    }
}
