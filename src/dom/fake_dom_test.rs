//! In-memory `Dom` for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::{Rc, Weak};

use super::{Dom, Element};
use crate::error::SettingsError;

#[derive(Default)]
struct Node {
    classes: Vec<String>,
    disabled: bool,
    value: Option<String>,
    text: String,
    style: BTreeMap<String, String>,
    rule: Option<BTreeMap<String, String>>,
    parent: Weak<RefCell<Node>>,
    children: Vec<FakeElement>,
    labels: Vec<FakeElement>,
    reflows: usize,
    class_log: Vec<String>,
}

#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let el = Self::new();
        el.0.borrow_mut().classes = classes.iter().map(|c| (*c).to_owned()).collect();
        el
    }

    pub fn with_text(text: &str) -> Self {
        let el = Self::new();
        el.0.borrow_mut().text = text.to_owned();
        el
    }

    /// A range input with the given value.
    pub fn input(value: &str) -> Self {
        let el = Self::new();
        el.0.borrow_mut().value = Some(value.to_owned());
        el
    }

    /// A `<style>` element whose sheet has one rule.
    pub fn style_sheet() -> Self {
        let el = Self::new();
        el.0.borrow_mut().rule = Some(BTreeMap::new());
        el
    }

    pub fn append(&self, child: &FakeElement) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    pub fn add_label(&self, label: &FakeElement) {
        self.0.borrow_mut().labels.push(label.clone());
    }

    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = Some(value.to_owned());
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn style_property(&self, name: &str) -> Option<String> {
        self.0.borrow().style.get(name).cloned()
    }

    pub fn rule_property(&self, name: &str) -> Option<String> {
        self.0.borrow().rule.as_ref().and_then(|r| r.get(name).cloned())
    }

    pub fn reflows(&self) -> usize {
        self.0.borrow().reflows
    }

    /// `+class` / `-class` entries in mutation order.
    pub fn class_log(&self) -> Vec<String> {
        self.0.borrow().class_log.clone()
    }
}

impl Element for FakeElement {
    fn class_names(&self) -> Vec<String> {
        self.classes()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        node.class_log.push(format!("+{class}"));
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        node.class_log.push(format!("-{class}"));
        node.classes.retain(|c| c != class);
    }

    fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(FakeElement)
    }

    fn last_element_child(&self) -> Option<Self> {
        self.0.borrow().children.last().cloned()
    }

    fn value(&self) -> Option<String> {
        self.0.borrow().value.clone()
    }

    fn labels(&self) -> Vec<Self> {
        self.0.borrow().labels.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_owned();
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), SettingsError> {
        self.0.borrow_mut().style.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_rule_property(&self, name: &str, value: &str) -> Result<(), SettingsError> {
        let mut node = self.0.borrow_mut();
        let rule = node.rule.as_mut().ok_or(SettingsError::Unavailable("first css rule"))?;
        rule.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn force_reflow(&self) {
        let mut node = self.0.borrow_mut();
        node.reflows += 1;
        node.class_log.push("reflow".to_owned());
    }
}

#[derive(Default)]
struct DomState {
    body: Option<FakeElement>,
    by_id: RefCell<HashMap<String, FakeElement>>,
    cookies: RefCell<BTreeMap<String, String>>,
    cookie_writes: RefCell<Vec<String>>,
    pathname: RefCell<String>,
    navigations: RefCell<Vec<String>>,
    copied: RefCell<Vec<String>>,
    deny_copy: Cell<bool>,
}

#[derive(Clone, Default)]
pub struct FakeDom(Rc<DomState>);

impl FakeDom {
    /// Document with a body carrying `body_classes` and path `/docs/page`.
    pub fn with_body(body_classes: &[&str]) -> Self {
        let state = DomState {
            body: Some(FakeElement::with_classes(body_classes)),
            pathname: RefCell::new("/docs/page".to_owned()),
            ..DomState::default()
        };
        Self(Rc::new(state))
    }

    pub fn without_body() -> Self {
        Self::default()
    }

    pub fn body_element(&self) -> FakeElement {
        self.0.body.clone().unwrap()
    }

    pub fn insert(&self, id: &str, element: &FakeElement) {
        self.0.by_id.borrow_mut().insert(id.to_owned(), element.clone());
    }

    pub fn cookie(&self, name: &str) -> Option<String> {
        self.0.cookies.borrow().get(name).cloned()
    }

    pub fn set_raw_cookie(&self, name: &str, value: &str) {
        self.0.cookies.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    pub fn cookie_writes(&self) -> Vec<String> {
        self.0.cookie_writes.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.0.navigations.borrow().clone()
    }

    pub fn copied(&self) -> Vec<String> {
        self.0.copied.borrow().clone()
    }

    pub fn deny_copy(&self) {
        self.0.deny_copy.set(true);
    }
}

impl Dom for FakeDom {
    type Element = FakeElement;

    fn body(&self) -> Option<FakeElement> {
        self.0.body.clone()
    }

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.0.by_id.borrow().get(id).cloned()
    }

    fn cookie_header(&self) -> String {
        self.0
            .cookies
            .borrow()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write_cookie(&self, cookie: &str) {
        self.0.cookie_writes.borrow_mut().push(cookie.to_owned());
        let first = cookie.split(';').next().unwrap_or_default();
        let (name, value) = first.split_once('=').unwrap_or((first, ""));
        self.0.cookies.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    fn pathname(&self) -> String {
        self.0.pathname.borrow().clone()
    }

    fn navigate(&self, path: &str) {
        self.0.navigations.borrow_mut().push(path.to_owned());
    }

    fn copy_node(&self, node: &FakeElement) -> Result<(), SettingsError> {
        if self.0.deny_copy.get() {
            return Err(SettingsError::CopyRejected);
        }
        self.0.copied.borrow_mut().push(node.text());
        Ok(())
    }
}
