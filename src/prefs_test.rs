use super::*;

#[test]
fn decodes_all_known_cookies() {
    let jar = CookieJar::parse("theme=dracula-theme; dark_mode=1; body_width=45; use_js=; fonts=1");
    let prefs = Preferences::from_cookies(&jar, &SettingsConfig::default());
    assert_eq!(prefs.theme.as_deref(), Some("dracula-theme"));
    assert_eq!(prefs.dark_mode, Some(true));
    assert_eq!(prefs.body_width.as_deref(), Some("45"));
    assert_eq!(prefs.options.get("use_js"), Some(&false));
    assert_eq!(prefs.options.get("fonts"), Some(&true));
    assert!(!prefs.options.contains_key("use_hl"));
}

#[test]
fn empty_jar_yields_empty_preferences() {
    let prefs = Preferences::from_cookies(&CookieJar::default(), &SettingsConfig::default());
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn empty_mode_cookie_means_light_not_unset() {
    let jar = CookieJar::parse("dark_mode=");
    let prefs = Preferences::from_cookies(&jar, &SettingsConfig::default());
    assert_eq!(prefs.dark_mode, Some(false));
}

#[test]
fn unknown_option_cookies_are_ignored() {
    let jar = CookieJar::parse("session=abc; extra_css=1");
    let prefs = Preferences::from_cookies(&jar, &SettingsConfig::default());
    assert_eq!(prefs.options.len(), 1);
    assert_eq!(prefs.options.get("extra_css"), Some(&true));
}

#[test]
fn width_is_passed_through_unvalidated() {
    let jar = CookieJar::parse("body_width=wide");
    let prefs = Preferences::from_cookies(&jar, &SettingsConfig::default());
    assert_eq!(prefs.body_width.as_deref(), Some("wide"));
}

#[test]
fn serializes_to_json_for_js() {
    let jar = CookieJar::parse("theme=nord; dark_mode=");
    let prefs = Preferences::from_cookies(&jar, &SettingsConfig::default());
    let json = serde_json::to_value(&prefs).unwrap();
    assert_eq!(json["theme"], "nord");
    assert_eq!(json["dark_mode"], false);
    assert!(json["body_width"].is_null());
}
