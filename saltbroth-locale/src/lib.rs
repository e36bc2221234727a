//! Supported locale set for SALTBROTH content.
//!
//! Content is stored in parallel per-locale directory trees, so every content
//! operation is parameterized by exactly one [`Locale`]. The set of locales is
//! closed: adding a language means adding a variant here, which forces every
//! exhaustive match in the workspace to handle it.
//!
//! URLs for the default locale omit the locale prefix; all other locales are
//! prefixed with their two-letter tag (see [`localized_href`]).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A language supported by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// English (default locale).
    #[serde(rename = "en")]
    En,
    /// Spanish.
    #[serde(rename = "es")]
    Es,
}

/// Error returned when parsing an unsupported locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale '{0}'")]
pub struct LocaleParseError(pub String);

impl Locale {
    /// All supported locales, in stable order.
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Es];

    /// The two-letter tag used in URLs and the content directory layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Human-readable name of the language, in that language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// Whether this is the default locale (URLs omit its prefix).
    pub fn is_default(&self) -> bool {
        *self == Locale::default()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .iter()
            .copied()
            .find(|locale| locale.as_str() == s)
            .ok_or_else(|| LocaleParseError(s.to_string()))
    }
}

/// Build a locale-prefixed href for a site path.
///
/// The default locale omits the prefix, all others get `/{tag}{path}`.
/// The path is normalized to start with a single `/`.
pub fn localized_href(locale: Locale, path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    if locale.is_default() {
        path
    } else {
        format!("/{}{}", locale.as_str(), path)
    }
}

/// Hrefs for the same path across every supported locale.
///
/// Used by the rendering layer for `hreflang` alternates and the language
/// switcher.
pub fn locale_alternates(path: &str) -> BTreeMap<Locale, String> {
    Locale::ALL
        .iter()
        .map(|&locale| (locale, localized_href(locale, path)))
        .collect()
}
