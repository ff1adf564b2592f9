//! Narrow DOM capability set used by the controller.
//!
//! The controller never touches `web_sys` directly. It sees the document
//! through [`Dom`] (lookups, cookies, location, clipboard) and each node
//! through [`Element`] (classes, `disabled`, structure, styles). The browser
//! implementation lives in [`crate::web`]; tests use an in-memory fake.
//!
//! Element handles are cheap clones of a shared node. Mutations through one
//! handle are visible through every other handle to the same node.

#[cfg(test)]
#[path = "dom/fake_dom_test.rs"]
pub(crate) mod fake_dom;

use crate::error::SettingsError;

/// A single DOM node as seen by the controller.
pub trait Element: Clone {
    fn class_names(&self) -> Vec<String>;
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Current `disabled` state of a style/link element.
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);

    fn parent(&self) -> Option<Self>;
    fn last_element_child(&self) -> Option<Self>;

    /// Current value of a form control, `None` for other elements.
    fn value(&self) -> Option<String>;
    /// Labels associated with a form control.
    fn labels(&self) -> Vec<Self>;
    fn set_text(&self, text: &str);

    /// Set a property on this element's inline style.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Js`] if the element has no inline style or the write throws.
    fn set_style_property(&self, name: &str, value: &str) -> Result<(), SettingsError>;

    /// Set a property on the first rule of this style element's sheet.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Unavailable`] if there is no sheet or first
    /// style rule, or [`SettingsError::Js`] if the write throws.
    fn set_rule_property(&self, name: &str, value: &str) -> Result<(), SettingsError>;

    /// Force a synchronous layout so a removed animation class takes effect.
    fn force_reflow(&self);
}

/// Document-level capabilities.
pub trait Dom {
    type Element: Element;

    fn body(&self) -> Option<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Raw `document.cookie` string.
    fn cookie_header(&self) -> String;
    /// Assign one formatted cookie to `document.cookie`.
    fn write_cookie(&self, cookie: &str);

    fn pathname(&self) -> String;
    /// Full navigation to `path`.
    fn navigate(&self, path: &str);

    /// Select `node`, run the copy command, then clear the selection.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::CopyRejected`] when the browser declines the
    /// copy, or another variant when the selection machinery is missing.
    fn copy_node(&self, node: &Self::Element) -> Result<(), SettingsError>;
}
