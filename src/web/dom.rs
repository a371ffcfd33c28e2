//! `web-sys` adapters implementing the behavior ports.
//!
//! Every adapter owns cloned element handles, so behaviors receive exactly
//! the elements they act on. DOM call failures are logged and dropped.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, FormData, HtmlButtonElement, HtmlFormElement, NodeList, Storage, Window};

use crate::error::FolioError;
use crate::filter::{FilterButton, ProjectCard};
use crate::forms::FormFields;
use crate::forms::contact::{ContactSurface, StatusKind, StatusMessage};
use crate::forms::demo::{DemoSurface, Notifier};
use crate::nav::NavLink;
use crate::reveal::RevealTarget;
use crate::theme::{PreferenceStore, Theme, ThemeSurface};
use crate::year::TextSlot;

/// Attach `handler` for the lifetime of the page.
///
/// # Errors
///
/// Returns [`FolioError::Js`] if the target refuses the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FolioError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Collect the element nodes of a `NodeList`.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::warn!("class {class} not updated: {err:?}");
    }
}

// =============================================================
// Theme
// =============================================================

/// `localStorage` entry under a fixed key. Absent storage reads as empty.
pub struct LocalPreference {
    storage: Option<Storage>,
    key: String,
}

impl LocalPreference {
    pub fn open(window: &Window, key: &str) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::debug!("localStorage unavailable, theme choice will not persist");
        }
        Self { storage, key: key.to_owned() }
    }
}

impl PreferenceStore for LocalPreference {
    fn load(&self) -> Option<String> {
        self.storage.as_ref()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(&self.key, value) {
                log::warn!("theme choice not saved: {err:?}");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.remove_item(&self.key) {
                log::warn!("theme choice not cleared: {err:?}");
            }
        }
    }
}

/// Root element attribute plus the optional toggle label.
pub struct DocumentTheme {
    pub root: Element,
    pub attribute: String,
    pub label: Option<Element>,
}

impl ThemeSurface for DocumentTheme {
    fn apply(&self, theme: Theme) {
        if let Err(err) = self.root.set_attribute(&self.attribute, theme.as_str()) {
            log::warn!("theme attribute not set: {err:?}");
        }
    }

    fn set_label(&self, text: &str) {
        if let Some(label) = &self.label {
            label.set_text_content(Some(text));
        }
    }
}

// =============================================================
// Class markers
// =============================================================

/// An element that gains or loses one class. Serves reveal targets, filter
/// buttons and nav links.
pub struct ClassMarker {
    element: Element,
    class: String,
}

impl ClassMarker {
    pub fn new(element: Element, class: &str) -> Self {
        Self { element, class: class.to_owned() }
    }
}

impl RevealTarget for ClassMarker {
    fn mark_visible(&self) {
        set_class(&self.element, &self.class, true);
    }
}

impl FilterButton for ClassMarker {
    fn set_active(&self, active: bool) {
        set_class(&self.element, &self.class, active);
    }
}

impl NavLink for ClassMarker {
    fn set_active(&self, active: bool) {
        set_class(&self.element, &self.class, active);
    }
}

/// Gallery card read through its category attribute.
pub struct CardElement {
    element: Element,
    category_attribute: String,
    hidden_class: String,
}

impl CardElement {
    pub fn new(element: Element, category_attribute: &str, hidden_class: &str) -> Self {
        Self {
            element,
            category_attribute: category_attribute.to_owned(),
            hidden_class: hidden_class.to_owned(),
        }
    }
}

impl ProjectCard for CardElement {
    fn category(&self) -> String {
        self.element.get_attribute(&self.category_attribute).unwrap_or_default()
    }

    fn set_hidden(&self, hidden: bool) {
        set_class(&self.element, &self.hidden_class, hidden);
    }
}

pub struct TextElement(pub Element);

impl TextSlot for TextElement {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

// =============================================================
// Forms
// =============================================================

/// A `<form>` with its optional submit control and status placeholder.
pub struct FormElement {
    pub form: HtmlFormElement,
    pub submit: Option<HtmlButtonElement>,
    pub status: Option<Element>,
    pub success_class: String,
    pub error_class: String,
}

impl FormElement {
    /// A bare form without a submit control or status placeholder.
    pub fn bare(form: HtmlFormElement) -> Self {
        Self {
            form,
            submit: None,
            status: None,
            success_class: String::new(),
            error_class: String::new(),
        }
    }

    fn data(&self) -> Option<FormData> {
        FormData::new_with_form(&self.form).ok()
    }
}

impl DemoSurface for FormElement {
    fn field(&self, name: &str) -> Option<String> {
        self.data()?.get(name).as_string()
    }

    fn reset(&self) {
        self.form.reset();
    }
}

impl ContactSurface for FormElement {
    fn fields(&self) -> FormFields {
        let Some(data) = self.data() else {
            return Vec::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };
        // File inputs yield non-string values and are skipped.
        entries
            .flatten()
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn submit_label(&self) -> String {
        self.submit
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default()
    }

    fn set_submit_label(&self, text: &str) {
        if let Some(button) = &self.submit {
            button.set_text_content(Some(text));
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        if let Some(button) = &self.submit {
            button.set_disabled(!enabled);
        }
    }

    fn show_status(&self, status: Option<&StatusMessage>) {
        let Some(placeholder) = &self.status else {
            return;
        };
        placeholder.set_text_content(status.map(|s| s.text.as_str()));
        let kind = status.map(|s| s.kind);
        set_class(placeholder, &self.success_class, kind == Some(StatusKind::Success));
        set_class(placeholder, &self.error_class, kind == Some(StatusKind::Error));
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// Acknowledges through `window.alert`.
pub struct AlertNotifier(pub Window);

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(err) = self.0.alert_with_message(message) {
            log::warn!("acknowledgment not shown: {err:?}");
        }
    }
}
