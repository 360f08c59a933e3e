// SPDX-License-Identifier: MPL-2.0
//! Host environment queries.
//!
//! The stores never ask the operating system directly. Whatever runs them
//! picks a [`Host`] at startup: [`SystemHost`] for an interactive session,
//! [`HeadlessHost`] where no user preferences exist, or [`StaticHost`] for
//! fixed answers.

/// What the surrounding environment reports about the user.
pub trait Host {
    /// Whether a user-facing session with preferences and storage exists.
    fn is_interactive(&self) -> bool;

    /// Best-guess locale tag, such as `de-DE`.
    fn preferred_locale(&self) -> Option<String>;

    /// Whether the user prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;
}

/// Reads preferences from the operating system.
#[derive(Debug, Clone, Default)]
pub struct SystemHost {
    locale_override: Option<String>,
}

impl SystemHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports `locale` instead of the operating system's locale.
    #[must_use]
    pub fn with_locale_override(locale: Option<String>) -> Self {
        Self {
            locale_override: locale,
        }
    }
}

impl Host for SystemHost {
    fn is_interactive(&self) -> bool {
        true
    }

    fn preferred_locale(&self) -> Option<String> {
        self.locale_override.clone().or_else(sys_locale::get_locale)
    }

    fn prefers_dark(&self) -> bool {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => true,
            Ok(_) => false,
            Err(error) => {
                tracing::debug!(?error, "color scheme detection failed, assuming light");
                false
            }
        }
    }
}

/// A host without a user session: no locale, no dark preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessHost;

impl Host for HeadlessHost {
    fn is_interactive(&self) -> bool {
        false
    }

    fn preferred_locale(&self) -> Option<String> {
        None
    }

    fn prefers_dark(&self) -> bool {
        false
    }
}

/// Fixed answers, for embedding and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHost {
    pub locale: Option<String>,
    pub dark: bool,
}

impl StaticHost {
    #[must_use]
    pub fn new(locale: Option<&str>, dark: bool) -> Self {
        Self {
            locale: locale.map(str::to_string),
            dark,
        }
    }
}

impl Host for StaticHost {
    fn is_interactive(&self) -> bool {
        true
    }

    fn preferred_locale(&self) -> Option<String> {
        self.locale.clone()
    }

    fn prefers_dark(&self) -> bool {
        self.dark
    }
}
