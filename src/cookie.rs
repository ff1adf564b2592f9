//! Cookie formatting and parsing.
//!
//! Every preference is mirrored into a root-path cookie with a fixed
//! far-future expiry so the server can render the right theme and width on
//! the next request without any script running.
//!
//! BOOLEAN CONTRACT
//! ================
//! Booleans are written as `"1"` (true) or `""` (false). A reader must treat
//! any non-empty value as true and an empty value as false; an absent cookie
//! means "never set" and falls back to the reader's own default.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::{BOOL_FALSE, BOOL_TRUE, COOKIE_EXPIRES, COOKIE_PATH};

/// `SameSite` policy attached to written cookies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    #[default]
    Lax,
    Strict,
    None,
}

impl SameSite {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lax => "lax",
            Self::Strict => "strict",
            Self::None => "none",
        }
    }
}

/// Attributes appended to every cookie write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieAttributes {
    pub path: String,
    pub same_site: SameSite,
    pub expires: String,
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self { path: COOKIE_PATH.to_owned(), same_site: SameSite::Lax, expires: COOKIE_EXPIRES.to_owned() }
    }
}

/// Build the string assigned to `document.cookie`.
#[must_use]
pub fn format_cookie(name: &str, value: &str, attrs: &CookieAttributes) -> String {
    format!(
        "{name}={value}; path={}; samesite={}; expires={}",
        attrs.path,
        attrs.same_site.as_str(),
        attrs.expires
    )
}

/// Encode a boolean as `"1"` or `""`.
#[must_use]
pub fn encode_bool(value: bool) -> &'static str {
    if value { BOOL_TRUE } else { BOOL_FALSE }
}

/// Decode a boolean cookie value: non-empty is true.
#[must_use]
pub fn decode_bool(raw: &str) -> bool {
    !raw.is_empty()
}

/// Name/value view of a `document.cookie` string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    values: BTreeMap<String, String>,
}

impl CookieJar {
    /// Parse `a=1; b=; c=x`. Later duplicates win; a bare `name` is stored
    /// with an empty value.
    #[must_use]
    pub fn parse(header: &str) -> Self {
        let mut values = BTreeMap::new();
        for pair in header.split(';') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            values.insert(name.to_owned(), value.trim().to_owned());
        }
        Self { values }
    }

    /// Raw value for `name`, if the cookie is present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Boolean value for `name` per the contract above; `None` when absent.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).map(decode_bool)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
