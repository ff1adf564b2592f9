//! JS-facing exports.
//!
//! The page calls these from inline handlers (`onchange="switchOption(event, 'fonts')"`)
//! exactly as it would call hand-written script functions. A single
//! controller lives in a thread-local registry; `init` replaces it together
//! with its slider listeners, and any handler called before `init` gets a
//! controller built from the default config.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use crate::config::SettingsConfig;
use crate::controller::SettingsController;
use crate::error::SettingsError;
use crate::theme::{ThemeMode, ThemeName};
use crate::web::{WebDom, WebElement};

type Controller = SettingsController<WebDom>;
type Handler = fn(&Controller, &WebElement);

/// Slider release persists the width; live drag only updates the label.
const SLIDER_EVENTS: [(&str, Handler); 3] = [
    ("mouseup", Controller::change_body_width),
    ("touchend", Controller::change_body_width),
    ("input", Controller::change_range_label),
];

/// An event listener that unregisters itself when dropped.
struct Listener {
    target: web_sys::Element,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {err:?}", self.event);
        }
    }
}

struct Registry {
    controller: Controller,
    _listeners: Vec<Listener>,
}

thread_local! {
    static REGISTRY: RefCell<Option<Registry>> = const { RefCell::new(None) };
}

fn to_js(err: SettingsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(log::LevelFilter::Info);
    if let Err(err) = init(None) {
        log::debug!("slider wiring deferred until init: {err:?}");
    }
}

/// Build the controller from an optional JSON config and wire the width
/// slider if the page has one. `start` already runs this with the default
/// config once the module loads; call it again to pass a custom config, when
/// the module loads before `<body>` exists, or after replacing the body or
/// any tracked element.
///
/// # Errors
///
/// Throws if the config is malformed or the document has no body.
#[wasm_bindgen]
pub fn init(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json.as_deref() {
        Some(raw) => SettingsConfig::from_json(raw).map_err(to_js)?,
        None => SettingsConfig::default(),
    };
    log::set_max_level(config.log_level().to_level_filter());

    // Drop the previous registry first so its listeners are removed before
    // new ones are attached to a possibly identical slider.
    drop(REGISTRY.with(|slot| slot.borrow_mut().take()));

    let controller = SettingsController::new(WebDom::from_window().map_err(to_js)?, config).map_err(to_js)?;
    let listeners = match controller.width_slider() {
        Some(slider) => wire_slider(slider.inner())?,
        None => {
            log::debug!("no width slider on this page");
            Vec::new()
        }
    };
    log::info!("settings controller initialised");

    REGISTRY.with(|slot| {
        *slot.borrow_mut() = Some(Registry { controller, _listeners: listeners });
    });
    Ok(())
}

fn wire_slider(slider: &web_sys::Element) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::with_capacity(SLIDER_EVENTS.len());
    for (event, handler) in SLIDER_EVENTS {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            run_on_target(&ev, handler);
        });
        slider.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        listeners.push(Listener { target: slider.clone(), event, callback });
    }
    Ok(listeners)
}

fn with_controller<T>(f: impl FnOnce(&Controller) -> Result<T, SettingsError>) -> Result<T, JsValue> {
    REGISTRY
        .with(|slot| {
            if slot.borrow().is_none() {
                let controller = SettingsController::new(WebDom::from_window()?, SettingsConfig::default())?;
                *slot.borrow_mut() = Some(Registry { controller, _listeners: Vec::new() });
            }
            let slot = slot.borrow();
            let registry = slot.as_ref().ok_or(SettingsError::Unavailable("settings controller"))?;
            f(&registry.controller)
        })
        .map_err(to_js)
}

fn run_on_target(event: &web_sys::Event, handler: Handler) {
    let Some(target) = WebElement::from_event_target(event.target()) else {
        log::debug!("{} event without element target", event.type_());
        return;
    };
    if let Err(err) = with_controller(|c| {
        handler(c, &target);
        Ok(())
    }) {
        log::warn!("{} handler failed: {err:?}", event.type_());
    }
}

/// Apply a palette (`dracula` or `dracula-theme`) and mode (`dark`/`light`
/// or a marker class such as `dark-mode`).
///
/// # Errors
///
/// Throws on an empty palette name or an unknown mode string.
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(name: &str, mode: &str) -> Result<(), JsValue> {
    with_controller(|c| {
        let name = ThemeName::parse(name, c.config())?;
        let mode = ThemeMode::parse(mode, c.config())?;
        c.set_theme(&name, mode);
        Ok(())
    })
}

/// Flip light/dark; returns the new mode.
///
/// # Errors
///
/// Throws if no controller can be built.
#[wasm_bindgen(js_name = invertTheme)]
pub fn invert_theme() -> Result<String, JsValue> {
    with_controller(|c| Ok(c.invert_theme().to_string()))
}

/// Checkbox `onchange` handler.
///
/// # Errors
///
/// Throws if no controller can be built.
#[wasm_bindgen(js_name = switchOption)]
pub fn switch_option(event: web_sys::Event, option_name: &str) -> Result<(), JsValue> {
    let checked = event
        .target()
        .as_ref()
        .and_then(|t| t.dyn_ref::<HtmlInputElement>())
        .is_some_and(HtmlInputElement::checked);
    with_controller(|c| {
        c.switch_option(option_name, checked);
        Ok(())
    })
}

/// Copy-button `onclick` handler.
///
/// # Errors
///
/// Throws when the browser rejects the copy.
#[wasm_bindgen(js_name = CopyCode)]
pub fn copy_code(event: web_sys::Event) -> Result<(), JsValue> {
    let Some(control) = WebElement::from_event_target(event.target()) else {
        return Ok(());
    };
    with_controller(|c| c.copy_code(&control))
}

#[wasm_bindgen(js_name = ChangeBodyWidth)]
pub fn change_body_width(event: web_sys::Event) {
    run_on_target(&event, Controller::change_body_width);
}

#[wasm_bindgen(js_name = ChangeRangeLabel)]
pub fn change_range_label(event: web_sys::Event) {
    run_on_target(&event, Controller::change_range_label);
}

/// Current cookie-backed preferences as JSON.
///
/// # Errors
///
/// Throws if no controller can be built.
#[wasm_bindgen]
pub fn preferences() -> Result<String, JsValue> {
    with_controller(|c| serde_json::to_string(&c.preferences()).map_err(SettingsError::Serialize))
}
