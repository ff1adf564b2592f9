//! Theme name and mode.
//!
//! The page tracks two orthogonal axes: a palette name (`dracula`) and a
//! light/dark mode. Both are carried as typed values inside the crate and
//! only become class strings at the DOM boundary, where a name maps to
//! `<name><suffix>` and a mode maps to one of two marker classes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SettingsConfig;
use crate::error::SettingsError;

/// Light/dark display variant, independent of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Marker class for this mode.
    #[must_use]
    pub fn class(self, config: &SettingsConfig) -> &str {
        match self {
            Self::Light => config.light_class.as_str(),
            Self::Dark => config.dark_class.as_str(),
        }
    }

    /// Parse `dark`/`light` or the configured marker class
    /// (`dark-mode`/`light-mode`).
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownMode`] for anything else.
    pub fn parse(raw: &str, config: &SettingsConfig) -> Result<Self, SettingsError> {
        let trimmed = raw.trim();
        if trimmed == config.light_class {
            Ok(Self::Light)
        } else if trimmed == config.dark_class {
            Ok(Self::Dark)
        } else {
            trimmed.parse().map_err(|_| SettingsError::UnknownMode(raw.to_owned()))
        }
    }

    /// Both marker classes, light first.
    #[must_use]
    pub fn all_classes(config: &SettingsConfig) -> [&str; 2] {
        [config.light_class.as_str(), config.dark_class.as_str()]
    }
}

impl FromStr for ThemeMode {
    type Err = SettingsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("light") {
            Ok(Self::Light)
        } else if trimmed.eq_ignore_ascii_case("dark") {
            Ok(Self::Dark)
        } else {
            Err(SettingsError::UnknownMode(raw.to_owned()))
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Palette identifier, stored without the class suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeName(String);

impl ThemeName {
    /// Accepts `dracula` or `dracula-theme` and keeps `dracula`.
    #[must_use]
    pub fn new(raw: &str, config: &SettingsConfig) -> Self {
        let trimmed = raw.trim();
        let bare = trimmed.strip_suffix(config.theme_class_suffix.as_str()).unwrap_or(trimmed);
        Self(bare.to_owned())
    }

    /// Like [`ThemeName::new`], but rejects names that are empty without
    /// their suffix, which would produce a bare suffix class.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::EmptyThemeName`].
    pub fn parse(raw: &str, config: &SettingsConfig) -> Result<Self, SettingsError> {
        let name = Self::new(raw, config);
        if name.0.is_empty() {
            return Err(SettingsError::EmptyThemeName(raw.to_owned()));
        }
        Ok(name)
    }

    /// Recover a name from a class token, if it carries the theme suffix.
    #[must_use]
    pub fn from_class(class: &str, config: &SettingsConfig) -> Option<Self> {
        let bare = class.strip_suffix(config.theme_class_suffix.as_str())?;
        if bare.is_empty() {
            return None;
        }
        Some(Self(bare.to_owned()))
    }

    /// Whether `class` is any theme-name class.
    #[must_use]
    pub fn is_theme_class(class: &str, config: &SettingsConfig) -> bool {
        Self::from_class(class, config).is_some()
    }

    #[must_use]
    pub fn class(&self, config: &SettingsConfig) -> String {
        format!("{}{}", self.0, config.theme_class_suffix)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
