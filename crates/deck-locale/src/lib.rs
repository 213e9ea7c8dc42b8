//! # deck-locale
//!
//! The closed set of supported locales and the path-resolution rules that
//! keep every user-facing route under a locale namespace.
//!
//! Every page route is expected to begin with a two-letter locale segment
//! (`/en/projects`, `/tr/login`). Paths missing the segment are redirected to
//! the default-locale-prefixed equivalent; API routes, internal assets, and
//! file requests pass through untouched. Only the FIRST path segment is ever
//! examined — a locale string appearing deeper in the path does not count.

mod resolver;

pub use resolver::{Resolution, Switch, resolve, resolve_with, switch};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A path segment that did not name a supported locale.
#[derive(Debug, Error)]
#[error("unsupported locale '{0}' (supported: en, tr)")]
pub struct UnsupportedLocale(pub String);

/// A supported UI locale. Closed set; carried only in the URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Tr,
}

/// All supported locales.
pub const SUPPORTED: &[Locale] = &[Locale::En, Locale::Tr];

/// The locale used when a path carries none.
pub const DEFAULT: Locale = Locale::En;

impl Locale {
    /// The path-segment representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "tr" => Ok(Self::Tr),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_roundtrips_every_supported_locale() {
        for locale in SUPPORTED {
            assert_eq!(
                locale.as_str().parse::<Locale>().expect("supported"),
                *locale
            );
        }
    }

    #[test]
    fn parse_rejects_unknown_and_uppercase_segments() {
        assert!("de".parse::<Locale>().is_err());
        // Path segments are case-sensitive; "EN" is not a locale segment.
        assert!("EN".parse::<Locale>().is_err());
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&Locale::Tr).expect("serialize"),
            r#""tr""#
        );
    }
}
