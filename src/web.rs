//! `web-sys` implementation of the DOM capability traits.
//!
//! Thin adapters only: every behavior decision lives in the controller.
//! DOM calls that throw are either returned as [`SettingsError::Js`] or, for
//! fire-and-forget class edits, logged at `warn`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CssStyleRule, CssStyleSheet, Document, HtmlDocument, HtmlElement, HtmlInputElement, HtmlLinkElement,
    HtmlStyleElement, Window,
};

use crate::dom::{Dom, Element};
use crate::error::SettingsError;

fn js_err(err: JsValue) -> SettingsError {
    SettingsError::Js(format!("{err:?}"))
}

#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    /// Wrap an event target, if it is an element.
    #[must_use]
    pub fn from_event_target(target: Option<web_sys::EventTarget>) -> Option<Self> {
        target.as_ref().and_then(|t| t.dyn_ref::<web_sys::Element>()).cloned().map(Self)
    }

    #[must_use]
    pub fn inner(&self) -> &web_sys::Element {
        &self.0
    }
}

impl Element for WebElement {
    fn class_names(&self) -> Vec<String> {
        let list = self.0.class_list();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            log::warn!("add class {class} failed: {err:?}");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            log::warn!("remove class {class} failed: {err:?}");
        }
    }

    fn is_disabled(&self) -> bool {
        if let Some(style) = self.0.dyn_ref::<HtmlStyleElement>() {
            style.disabled()
        } else if let Some(link) = self.0.dyn_ref::<HtmlLinkElement>() {
            link.disabled()
        } else {
            self.0.has_attribute("disabled")
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(style) = self.0.dyn_ref::<HtmlStyleElement>() {
            style.set_disabled(disabled);
        } else if let Some(link) = self.0.dyn_ref::<HtmlLinkElement>() {
            link.set_disabled(disabled);
        } else {
            let result = if disabled {
                self.0.set_attribute("disabled", "")
            } else {
                self.0.remove_attribute("disabled")
            };
            if let Err(err) = result {
                log::warn!("set disabled={disabled} failed: {err:?}");
            }
        }
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(Self)
    }

    fn last_element_child(&self) -> Option<Self> {
        self.0.last_element_child().map(Self)
    }

    fn value(&self) -> Option<String> {
        self.0.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value)
    }

    fn labels(&self) -> Vec<Self> {
        let Some(labels) = self.0.dyn_ref::<HtmlInputElement>().and_then(HtmlInputElement::labels) else {
            return Vec::new();
        };
        (0..labels.length())
            .filter_map(|i| labels.get(i))
            .filter_map(|node| node.dyn_ref::<web_sys::Element>().cloned().map(Self))
            .collect()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), SettingsError> {
        let html = self
            .0
            .dyn_ref::<HtmlElement>()
            .ok_or(SettingsError::Unavailable("inline style"))?;
        html.style().set_property(name, value).map_err(js_err)
    }

    fn set_rule_property(&self, name: &str, value: &str) -> Result<(), SettingsError> {
        let sheet = self
            .0
            .dyn_ref::<HtmlStyleElement>()
            .and_then(HtmlStyleElement::sheet)
            .ok_or(SettingsError::Unavailable("stylesheet"))?;
        let sheet = sheet
            .dyn_ref::<CssStyleSheet>()
            .ok_or(SettingsError::Unavailable("css stylesheet"))?;
        let rule = sheet
            .css_rules()
            .map_err(js_err)?
            .item(0)
            .ok_or(SettingsError::Unavailable("first css rule"))?;
        let rule = rule
            .dyn_ref::<CssStyleRule>()
            .ok_or(SettingsError::Unavailable("first css style rule"))?;
        rule.style().set_property(name, value).map_err(js_err)
    }

    fn force_reflow(&self) {
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            std::hint::black_box(html.offset_width());
        }
    }
}

/// The live browser document.
#[derive(Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// Bind to the global window and document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Unavailable`] outside a browser window.
    pub fn from_window() -> Result<Self, SettingsError> {
        let window = web_sys::window().ok_or(SettingsError::Unavailable("window"))?;
        let document = window.document().ok_or(SettingsError::Unavailable("document"))?;
        Ok(Self { window, document })
    }

    fn html_document(&self) -> Result<&HtmlDocument, SettingsError> {
        self.document
            .dyn_ref::<HtmlDocument>()
            .ok_or(SettingsError::Unavailable("html document"))
    }

    fn clear_selection(&self) -> Result<(), SettingsError> {
        if let Some(selection) = self.window.get_selection().map_err(js_err)? {
            selection.remove_all_ranges().map_err(js_err)?;
        }
        Ok(())
    }
}

impl Dom for WebDom {
    type Element = WebElement;

    fn body(&self) -> Option<WebElement> {
        self.document.body().map(|body| WebElement(body.into()))
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn cookie_header(&self) -> String {
        match self.html_document().and_then(|doc| doc.cookie().map_err(js_err)) {
            Ok(header) => header,
            Err(err) => {
                log::warn!("cookie read failed: {err}");
                String::new()
            }
        }
    }

    fn write_cookie(&self, cookie: &str) {
        if let Err(err) = self.html_document().and_then(|doc| doc.set_cookie(cookie).map_err(js_err)) {
            log::warn!("cookie write failed: {err}");
        }
    }

    fn pathname(&self) -> String {
        match self.window.location().pathname() {
            Ok(path) => path,
            Err(err) => {
                log::warn!("pathname read failed: {err:?}");
                "/".to_owned()
            }
        }
    }

    fn navigate(&self, path: &str) {
        if let Err(err) = self.window.location().set_href(path) {
            log::warn!("navigation to {path} failed: {err:?}");
        }
    }

    fn copy_node(&self, node: &WebElement) -> Result<(), SettingsError> {
        let range = self.document.create_range().map_err(js_err)?;
        range.select_node(node.inner()).map_err(js_err)?;

        let selection = self
            .window
            .get_selection()
            .map_err(js_err)?
            .ok_or(SettingsError::Unavailable("selection"))?;
        selection.remove_all_ranges().map_err(js_err)?;
        selection.add_range(&range).map_err(js_err)?;

        let copied = self.html_document()?.exec_command("copy").map_err(js_err);
        self.clear_selection()?;
        if copied? { Ok(()) } else { Err(SettingsError::CopyRejected) }
    }
}
