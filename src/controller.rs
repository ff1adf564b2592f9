//! Settings and theme controller.
//!
//! Every operation follows the same shape: read the live DOM/cookie state,
//! write the new value to a cookie, then mutate classes or attributes. The
//! controller holds only resolved element handles and configuration; the
//! document remains the single source of truth, so calls are idempotent and
//! re-entrant.
//!
//! Handles are resolved once in [`SettingsController::new`]. If the body,
//! the invert button, or the width style element is replaced, build a new
//! controller.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::SettingsConfig;
use crate::cookie::{CookieJar, encode_bool, format_cookie};
use crate::dom::{Dom, Element};
use crate::error::SettingsError;
use crate::prefs::Preferences;
use crate::theme::{ThemeMode, ThemeName};

pub struct SettingsController<D: Dom> {
    dom: D,
    config: SettingsConfig,
    body: D::Element,
    /// Mirrors mode and theme classes for icon styling.
    invert_button: Option<D::Element>,
    /// `<style>` element whose first rule carries the width property.
    width_rule: Option<D::Element>,
}

impl<D: Dom> SettingsController<D> {
    /// Resolve tracked elements from `dom`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingBody`] if the document has no body.
    pub fn new(dom: D, config: SettingsConfig) -> Result<Self, SettingsError> {
        let body = dom.body().ok_or(SettingsError::MissingBody)?;
        let invert_button = dom.element_by_id(&config.invert_button_id);
        let width_rule = dom.element_by_id(&config.width_rule_id);
        log::debug!(
            "settings controller ready (invert button: {}, width rule: {})",
            invert_button.is_some(),
            width_rule.is_some()
        );
        Ok(Self { dom, config, body, invert_button, width_rule })
    }

    #[must_use]
    pub fn config(&self) -> &SettingsConfig {
        &self.config
    }

    // --- Cookies ---

    pub fn set_cookie(&self, name: &str, value: &str) {
        self.dom.write_cookie(&format_cookie(name, value, &self.config.cookie));
    }

    pub fn set_bool_cookie(&self, name: &str, value: bool) {
        self.set_cookie(name, encode_bool(value));
    }

    // --- Theme ---

    /// Elements that carry mode and theme classes.
    fn themed_elements(&self) -> impl Iterator<Item = &D::Element> {
        std::iter::once(&self.body).chain(self.invert_button.as_ref())
    }

    /// Active mode as read from the body classes.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        if self.body.has_class(ThemeMode::Light.class(&self.config)) {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Theme name currently applied to the body, if any.
    #[must_use]
    pub fn theme_name(&self) -> Option<ThemeName> {
        self.body
            .class_names()
            .iter()
            .find_map(|class| ThemeName::from_class(class, &self.config))
    }

    /// Flip between light and dark and persist the result.
    ///
    /// The mode cookie is computed from the state read before the flip: it
    /// stores whether the light class was present, which is exactly whether
    /// the page is dark afterwards.
    pub fn invert_theme(&self) -> ThemeMode {
        let was_light = self.body.has_class(ThemeMode::Light.class(&self.config));
        self.set_bool_cookie(&self.config.mode_cookie, was_light);

        let next = self.mode().inverted();
        for element in self.themed_elements() {
            for class in ThemeMode::all_classes(&self.config) {
                element.remove_class(class);
            }
            element.add_class(next.class(&self.config));
        }
        log::debug!("theme mode inverted to {next}");
        next
    }

    /// Apply palette `name`, then flip the mode once if it differs from `mode`.
    ///
    /// The cookie stores the class token (`dracula-theme`); the server only
    /// accepts names in that form.
    pub fn set_theme(&self, name: &ThemeName, mode: ThemeMode) {
        let class = name.class(&self.config);
        for element in self.themed_elements() {
            for existing in element.class_names() {
                if ThemeName::is_theme_class(&existing, &self.config) {
                    element.remove_class(&existing);
                }
            }
            element.add_class(&class);
        }
        self.set_cookie(&self.config.theme_cookie, &class);
        log::debug!("theme set to {name}");

        if !self.body.has_class(mode.class(&self.config)) {
            self.invert_theme();
        }
    }

    // --- Boolean options ---

    /// Checkbox handler: persist `checked` under `option`, then apply it.
    pub fn switch_option(&self, option: &str, checked: bool) {
        self.set_bool_cookie(option, checked);
        self.apply_option_change(option);
    }

    /// Reload for options that need a server render; otherwise flip the
    /// related stylesheet's `disabled` state. A missing related element is a
    /// no-op.
    pub fn apply_option_change(&self, option: &str) {
        if self.config.forces_reload(option) {
            let path = self.dom.pathname();
            log::debug!("option {option} requires reload of {path}");
            self.dom.navigate(&path);
            return;
        }

        let related_id = self.config.related_id(option);
        match self.dom.element_by_id(&related_id) {
            Some(related) => {
                let disabled = !related.is_disabled();
                related.set_disabled(disabled);
                log::debug!("option {option}: #{related_id} disabled={disabled}");
            }
            None => log::debug!("option {option}: no #{related_id}, nothing to toggle"),
        }
    }

    // --- Copy ---

    /// Copy the code block next to `control` and replay its feedback
    /// animation.
    ///
    /// The code node is found as `control.parent.lastElementChild.lastElementChild`.
    /// A missing node is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns the backend error when the copy is rejected. The animation
    /// still runs.
    pub fn copy_code(&self, control: &D::Element) -> Result<(), SettingsError> {
        let Some(node) = control
            .parent()
            .and_then(|p| p.last_element_child())
            .and_then(|c| c.last_element_child())
        else {
            log::debug!("copy control has no code node");
            return Ok(());
        };

        let copied = self.dom.copy_node(&node);
        if let Err(err) = &copied {
            log::warn!("copy failed: {err}");
        }

        let class = self.config.copy_animation_class.as_str();
        control.remove_class(class);
        control.force_reflow();
        control.add_class(class);
        copied
    }

    // --- Width ---

    /// The width slider, if this page has one. Handlers are only wired when
    /// this returns `Some`.
    #[must_use]
    pub fn width_slider(&self) -> Option<D::Element> {
        self.dom.element_by_id(&self.config.width_slider_id)
    }

    /// Persist the slider value and apply it as the width custom property.
    pub fn change_body_width(&self, slider: &D::Element) {
        let Some(value) = slider.value() else {
            return;
        };
        self.set_cookie(&self.config.width_cookie, &value);

        let property = self.config.width_property.as_str();
        let css_value = format!("{value}{}", self.config.width_unit);
        let applied = match &self.width_rule {
            Some(rule) => rule.set_rule_property(property, &css_value).or_else(|err| {
                log::warn!("width rule unusable ({err}), falling back to body style");
                self.body.set_style_property(property, &css_value)
            }),
            None => self.body.set_style_property(property, &css_value),
        };
        match applied {
            Ok(()) => log::debug!("body width set to {css_value}"),
            Err(err) => log::warn!("failed to apply {property}: {err}"),
        }
    }

    /// Show the live slider value in every associated label.
    pub fn change_range_label(&self, slider: &D::Element) {
        let Some(value) = slider.value() else {
            return;
        };
        for label in slider.labels() {
            label.set_text(&value);
        }
    }

    // --- Snapshot ---

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences::from_cookies(&CookieJar::parse(&self.dom.cookie_header()), &self.config)
    }
}
