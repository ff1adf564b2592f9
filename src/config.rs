//! Controller configuration.
//!
//! Every name the controller relies on (cookies, classes, element ids) lives
//! here so a page with different markup conventions can pass a JSON blob to
//! `init` instead of patching the crate. Missing fields take the defaults in
//! [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    COPY_ANIMATION_CLASS, DARK_MODE_CLASS, INVERT_BUTTON_ID, KNOWN_OPTIONS, LIGHT_MODE_CLASS, MODE_COOKIE,
    RELATED_SUFFIX, THEME_CLASS_SUFFIX, THEME_COOKIE, USE_JS_OPTION, WIDTH_COOKIE, WIDTH_PROPERTY, WIDTH_RULE_ID,
    WIDTH_SLIDER_ID, WIDTH_UNIT,
};
use crate::cookie::CookieAttributes;
use crate::error::SettingsError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    pub theme_cookie: String,
    pub mode_cookie: String,
    pub width_cookie: String,
    pub cookie: CookieAttributes,

    pub light_class: String,
    pub dark_class: String,
    pub theme_class_suffix: String,
    pub copy_animation_class: String,

    pub invert_button_id: String,
    pub width_rule_id: String,
    pub width_slider_id: String,
    pub related_suffix: String,

    /// Options whose change requires a server-rendered reload.
    pub reload_options: Vec<String>,
    /// Boolean options reported by the preferences snapshot.
    pub options: Vec<String>,

    pub width_property: String,
    pub width_unit: String,

    /// `error`, `warn`, `info`, `debug`, or `trace`.
    pub log_level: String,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            theme_cookie: THEME_COOKIE.to_owned(),
            mode_cookie: MODE_COOKIE.to_owned(),
            width_cookie: WIDTH_COOKIE.to_owned(),
            cookie: CookieAttributes::default(),
            light_class: LIGHT_MODE_CLASS.to_owned(),
            dark_class: DARK_MODE_CLASS.to_owned(),
            theme_class_suffix: THEME_CLASS_SUFFIX.to_owned(),
            copy_animation_class: COPY_ANIMATION_CLASS.to_owned(),
            invert_button_id: INVERT_BUTTON_ID.to_owned(),
            width_rule_id: WIDTH_RULE_ID.to_owned(),
            width_slider_id: WIDTH_SLIDER_ID.to_owned(),
            related_suffix: RELATED_SUFFIX.to_owned(),
            reload_options: vec![USE_JS_OPTION.to_owned()],
            options: KNOWN_OPTIONS.iter().map(|s| (*s).to_owned()).collect(),
            width_property: WIDTH_PROPERTY.to_owned(),
            width_unit: WIDTH_UNIT.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl SettingsConfig {
    /// Parse a JSON object; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Config`] if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(raw).map_err(SettingsError::Config)
    }

    /// Id of the element gated by `option`.
    #[must_use]
    pub fn related_id(&self, option: &str) -> String {
        format!("{option}{}", self.related_suffix)
    }

    #[must_use]
    pub fn forces_reload(&self, option: &str) -> bool {
        self.reload_options.iter().any(|o| o == option)
    }

    /// Parsed log level, falling back to `Info` for unknown strings.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(log::Level::Info)
    }
}
