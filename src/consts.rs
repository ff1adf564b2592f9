//! Default names shared between the page markup, the stylesheet, and the
//! server-side cookie reader.

// --- Cookies ---

/// Active palette name.
pub const THEME_COOKIE: &str = "theme";
/// `"1"` when dark mode is active, `""` otherwise.
pub const MODE_COOKIE: &str = "dark_mode";
/// Preferred content width, numeric string in rem.
pub const WIDTH_COOKIE: &str = "body_width";

/// Far-future expiry written on every cookie (the 32-bit `time_t` limit).
pub const COOKIE_EXPIRES: &str = "Tue, 19 Jan 2038 03:14:07 GMT";
pub const COOKIE_PATH: &str = "/";

/// Encoded boolean values. `""` is the false value, not absence.
pub const BOOL_TRUE: &str = "1";
pub const BOOL_FALSE: &str = "";

// --- Options ---

/// Option that forces a full reload to the current path when switched.
pub const USE_JS_OPTION: &str = "use_js";
/// Boolean options the server knows about.
pub const KNOWN_OPTIONS: [&str; 4] = [USE_JS_OPTION, "use_hl", "fonts", "extra_css"];
/// `${option}-related` names the style element gated by an option.
pub const RELATED_SUFFIX: &str = "-related";

// --- Classes ---

pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const THEME_CLASS_SUFFIX: &str = "-theme";
pub const COPY_ANIMATION_CLASS: &str = "copy-animation";

// --- Element ids ---

pub const INVERT_BUTTON_ID: &str = "invert-theme-button";
pub const WIDTH_RULE_ID: &str = "body_width-related";
pub const WIDTH_SLIDER_ID: &str = "body-width-range";

// --- Layout ---

pub const WIDTH_PROPERTY: &str = "--body-width";
pub const WIDTH_UNIT: &str = "rem";
