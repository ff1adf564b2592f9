//! Page settings and theme behavior for server-rendered documentation pages.
//!
//! This crate is compiled to WebAssembly and loaded by every page. It owns
//! the small amount of client-side behavior those pages have: switching the
//! light/dark mode and the color palette, toggling optional stylesheets from
//! settings checkboxes, applying the body-width slider, and copying code
//! blocks to the clipboard. Each preference is mirrored into a cookie so the
//! server renders the same state on the next request.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | All behavior, generic over a [`dom::Dom`] |
//! | [`dom`] | DOM capability traits the controller depends on |
//! | [`web`] | `web-sys` implementation of those traits |
//! | [`bindings`] | `#[wasm_bindgen]` exports called from page markup |
//! | [`theme`] | Typed theme name and mode |
//! | [`cookie`] | Cookie formatting, boolean encoding, parsing |
//! | [`prefs`] | Decoded preference snapshot |
//! | [`config`] | Names of cookies, classes, and element ids |
//! | [`consts`] | Default values for the config |
//! | [`error`] | [`error::SettingsError`] |

pub mod bindings;
pub mod config;
pub mod consts;
pub mod controller;
pub mod cookie;
pub mod dom;
pub mod error;
pub mod prefs;
pub mod theme;
pub mod web;

pub use config::SettingsConfig;
pub use controller::SettingsController;
pub use error::SettingsError;
pub use theme::{ThemeMode, ThemeName};
