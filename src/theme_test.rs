use super::*;

fn config() -> SettingsConfig {
    SettingsConfig::default()
}

#[test]
fn mode_parses_case_insensitively() {
    assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
    assert_eq!(" Light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
}

#[test]
fn mode_rejects_unknown_strings() {
    let err = "sepia".parse::<ThemeMode>().unwrap_err();
    assert!(matches!(err, SettingsError::UnknownMode(ref m) if m == "sepia"));
}

#[test]
fn mode_inversion_is_an_involution() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_ne!(mode.inverted(), mode);
        assert_eq!(mode.inverted().inverted(), mode);
    }
}

#[test]
fn mode_maps_to_configured_classes() {
    let config = config();
    assert_eq!(ThemeMode::Light.class(&config), "light-mode");
    assert_eq!(ThemeMode::Dark.class(&config), "dark-mode");
    assert_eq!(ThemeMode::all_classes(&config), ["light-mode", "dark-mode"]);
}

#[test]
fn mode_display_round_trips_through_from_str() {
    assert_eq!(ThemeMode::Dark.to_string(), "dark");
    assert_eq!(ThemeMode::Light.to_string().parse::<ThemeMode>().unwrap(), ThemeMode::Light);
}

#[test]
fn name_strips_class_suffix() {
    let config = config();
    assert_eq!(ThemeName::new("dracula", &config).as_str(), "dracula");
    assert_eq!(ThemeName::new("dracula-theme", &config).as_str(), "dracula");
    assert_eq!(ThemeName::new("dracula", &config).class(&config), "dracula-theme");
}

#[test]
fn from_class_only_accepts_suffixed_tokens() {
    let config = config();
    assert_eq!(ThemeName::from_class("solarized-theme", &config), Some(ThemeName::new("solarized", &config)));
    assert_eq!(ThemeName::from_class("dark-mode", &config), None);
    assert_eq!(ThemeName::from_class("-theme", &config), None);
    assert!(ThemeName::is_theme_class("nord-theme", &config));
    assert!(!ThemeName::is_theme_class("copy-animation", &config));
}

#[test]
fn custom_suffix_is_respected() {
    let config = SettingsConfig { theme_class_suffix: "-palette".to_owned(), ..SettingsConfig::default() };
    let name = ThemeName::new("nord-palette", &config);
    assert_eq!(name.as_str(), "nord");
    assert_eq!(name.class(&config), "nord-palette");
    assert_eq!(ThemeName::from_class("nord-theme", &config), None);
}

#[test]
fn mode_parse_accepts_marker_classes() {
    let config = config();
    assert_eq!(ThemeMode::parse("dark-mode", &config).unwrap(), ThemeMode::Dark);
    assert_eq!(ThemeMode::parse("light-mode", &config).unwrap(), ThemeMode::Light);
    assert_eq!(ThemeMode::parse("Dark", &config).unwrap(), ThemeMode::Dark);
}

#[test]
fn mode_parse_follows_configured_classes() {
    let config = SettingsConfig {
        light_class: "type-light".to_owned(),
        dark_class: "type-dark".to_owned(),
        ..SettingsConfig::default()
    };
    assert_eq!(ThemeMode::parse("type-dark", &config).unwrap(), ThemeMode::Dark);
    let err = ThemeMode::parse("dark-mode", &config).unwrap_err();
    assert!(matches!(err, SettingsError::UnknownMode(ref m) if m == "dark-mode"));
}

#[test]
fn name_parse_rejects_empty_names() {
    let config = config();
    for raw in ["", "  ", "-theme"] {
        let err = ThemeName::parse(raw, &config).unwrap_err();
        assert!(matches!(err, SettingsError::EmptyThemeName(_)), "{raw:?}");
    }
    assert_eq!(ThemeName::parse("nord-theme", &config).unwrap().as_str(), "nord");
}
