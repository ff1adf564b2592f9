//! Preferences as a server-side reader would decode them from cookies.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::SettingsConfig;
use crate::cookie::CookieJar;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Preferences {
    /// Raw palette name.
    pub theme: Option<String>,
    /// `None` when the mode cookie has never been written.
    pub dark_mode: Option<bool>,
    /// Raw width string; not validated.
    pub body_width: Option<String>,
    /// Known boolean options that have a cookie.
    pub options: BTreeMap<String, bool>,
}

impl Preferences {
    #[must_use]
    pub fn from_cookies(jar: &CookieJar, config: &SettingsConfig) -> Self {
        let options = config
            .options
            .iter()
            .filter_map(|name| jar.get_bool(name).map(|value| (name.clone(), value)))
            .collect();
        Self {
            theme: jar.get(&config.theme_cookie).map(str::to_owned),
            dark_mode: jar.get_bool(&config.mode_cookie),
            body_width: jar.get(&config.width_cookie).map(str::to_owned),
            options,
        }
    }
}
