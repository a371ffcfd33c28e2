//! Page bootstrap: bind each configured behavior to the elements present.
//!
//! ARCHITECTURE
//! ============
//! Each `install_*` function looks up exactly the elements its behavior
//! needs, constructs the behavior with them, and registers listeners. A
//! missing element means the behavior is simply not installed; an error
//! from the browser is logged and the remaining behaviors still install.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlFormElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MediaQueryList, Window,
};

use super::dom::{
    AlertNotifier, CardElement, ClassMarker, DocumentTheme, FormElement, LocalPreference, TextElement, elements,
    listen,
};
use super::net::FetchTransport;
use crate::config::{
    CONFIG_ELEMENT_ID, ContactConfig, ContactMode, FilterConfig, NavConfig, NewsletterConfig, RevealConfig,
    SiteConfig, ThemeConfig, YearConfig,
};
use crate::error::FolioError;
use crate::filter::{Filter, PortfolioFilter};
use crate::forms::contact::{ContactCopy, ContactForm};
use crate::forms::demo::DemoForm;
use crate::nav::NavHighlighter;
use crate::reveal::{Reveal, RevealStep};
use crate::theme::ThemeController;
use crate::year;

/// Install every behavior on the current document.
///
/// # Errors
///
/// Returns [`FolioError::Unavailable`] only when there is no window or
/// document at all; per-behavior failures are logged instead.
pub fn boot() -> Result<(), FolioError> {
    let window = web_sys::window().ok_or(FolioError::Unavailable("window"))?;
    let document = window.document().ok_or(FolioError::Unavailable("document"))?;
    let config = load_config(&document);

    report("theme", install_theme(&window, &document, &config.theme));
    report("reveal", install_reveal(&window, &document, &config.reveal));
    report("filter", install_filter(&document, &config.filter));
    install_year(&document, &config.year);
    report("nav", install_nav(&window, &document, &config.nav));
    report("newsletter", install_newsletter(&window, &document, &config.newsletter));
    report("contact", install_contact(&window, &document, &config.contact));
    log::debug!("folio: page behaviors installed");
    Ok(())
}

fn report(behavior: &str, result: Result<(), FolioError>) {
    if let Err(err) = result {
        log::warn!("{behavior}: not installed: {err}");
    }
}

fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("{err}; using defaults");
        SiteConfig::default()
    })
}

// =============================================================
// Theme
// =============================================================

fn install_theme(window: &Window, document: &Document, config: &ThemeConfig) -> Result<(), FolioError> {
    let root = document
        .document_element()
        .ok_or(FolioError::Unavailable("document element"))?;
    let media = window.match_media(&config.media_query).ok().flatten();
    let prefers_dark = media.as_ref().is_some_and(MediaQueryList::matches);

    let surface = DocumentTheme {
        root,
        attribute: config.attribute.clone(),
        label: document.get_element_by_id(&config.label_id),
    };
    let controller = Rc::new(ThemeController::init(
        LocalPreference::open(window, &config.storage_key),
        surface,
        prefers_dark,
    ));

    if let Some(media) = &media {
        let controller = Rc::clone(&controller);
        let query = media.clone();
        listen(media, "change", move |_: Event| {
            controller.on_environment_change(query.matches());
        })?;
    }

    if let Some(reset) = document.get_element_by_id(&config.reset_id) {
        let controller = Rc::clone(&controller);
        listen(&reset, "click", move |ev: Event| {
            ev.prevent_default();
            let prefers_dark = media.as_ref().is_some_and(MediaQueryList::matches);
            controller.clear_preference(prefers_dark);
        })?;
    }

    if let Some(toggle) = document.get_element_by_id(&config.toggle_id) {
        listen(&toggle, "click", move |ev: Event| {
            ev.prevent_default();
            controller.toggle();
        })?;
    }
    Ok(())
}

// =============================================================
// Reveal
// =============================================================

fn install_reveal(window: &Window, document: &Document, config: &RevealConfig) -> Result<(), FolioError> {
    let supported = js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    for section in &config.sections {
        let Some(element) = document.get_element_by_id(&section.id) else {
            continue;
        };
        let reveal = Rc::new(Reveal::new(ClassMarker::new(element.clone(), &section.class)));
        if !supported {
            reveal.reveal_now();
            continue;
        }
        if let Err(err) = observe_once(&element, Rc::clone(&reveal), config) {
            log::warn!("reveal #{}: observer failed, revealing now: {err}", section.id);
            reveal.reveal_now();
        }
    }
    Ok(())
}

fn observe_once(element: &Element, reveal: Rc<Reveal<ClassMarker>>, config: &RevealConfig) -> Result<(), FolioError> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if reveal.on_intersection(entry.is_intersecting()) == RevealStep::Revealed {
                observer.unobserve(&entry.target());
                log::debug!("section revealed");
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.root_margin);
    options.set_threshold(&JsValue::from_f64(config.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    callback.forget();
    Ok(())
}

// =============================================================
// Filter
// =============================================================

fn install_filter(document: &Document, config: &FilterConfig) -> Result<(), FolioError> {
    let Some(gallery) = document.query_selector(&config.gallery_selector)? else {
        return Ok(());
    };
    let buttons = elements(&document.query_selector_all(&config.button_selector)?);
    if buttons.is_empty() {
        return Ok(());
    }
    // Buttons without a filter value still lose the active marker.
    let bound: Vec<_> = buttons
        .iter()
        .map(|button| {
            let filter = button.get_attribute(&config.filter_attribute).map(|v| Filter::parse(&v));
            (filter, ClassMarker::new(button.clone(), &config.active_class))
        })
        .collect();
    let cards = elements(&gallery.query_selector_all(&config.card_selector)?)
        .into_iter()
        .map(|card| CardElement::new(card, &config.category_attribute, &config.hidden_class))
        .collect();

    let filter = Rc::new(PortfolioFilter::new(bound, cards));
    for (index, button) in buttons.iter().enumerate() {
        if !filter.is_selectable(index) {
            continue;
        }
        let filter = Rc::clone(&filter);
        listen(button, "click", move |_: Event| {
            filter.select(index);
        })?;
    }
    Ok(())
}

// =============================================================
// Year
// =============================================================

fn install_year(document: &Document, config: &YearConfig) {
    if let Some(element) = document.get_element_by_id(&config.element_id) {
        year::stamp(&TextElement(element), year::current_year());
    }
}

// =============================================================
// Navigation
// =============================================================

fn install_nav(window: &Window, document: &Document, config: &NavConfig) -> Result<(), FolioError> {
    if !config.enabled {
        return Ok(());
    }
    let (Some(home), Some(blog)) = (
        document.query_selector(&config.home_selector)?,
        document.query_selector(&config.blog_selector)?,
    ) else {
        return Ok(());
    };
    let nav = Rc::new(NavHighlighter::new(
        ClassMarker::new(home, &config.active_class),
        ClassMarker::new(blog, &config.active_class),
        config.blog_anchor.clone(),
    ));
    let location = window.location();
    nav.refresh(&location.hash().unwrap_or_default());

    for event in ["hashchange", "load"] {
        let nav = Rc::clone(&nav);
        let location = location.clone();
        listen(window, event, move |_: Event| {
            nav.refresh(&location.hash().unwrap_or_default());
        })?;
    }
    Ok(())
}

// =============================================================
// Forms
// =============================================================

fn find_form(document: &Document, selector: &str) -> Result<Option<HtmlFormElement>, FolioError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok()))
}

fn install_newsletter(window: &Window, document: &Document, config: &NewsletterConfig) -> Result<(), FolioError> {
    let Some(form) = find_form(document, &config.form_selector)? else {
        return Ok(());
    };
    let demo = DemoForm::new(
        "newsletter",
        FormElement::bare(form.clone()),
        AlertNotifier(window.clone()),
        config.acknowledgment.clone(),
    )
    .logging_field(config.email_field.clone());
    listen(&form, "submit", move |ev: Event| {
        ev.prevent_default();
        demo.submit();
    })
}

fn install_contact(window: &Window, document: &Document, config: &ContactConfig) -> Result<(), FolioError> {
    let Some(form) = find_form(document, &config.form_selector)? else {
        return Ok(());
    };
    let endpoint = form
        .get_attribute("action")
        .filter(|action| !action.trim().is_empty());

    let endpoint = match (config.mode, endpoint) {
        (ContactMode::Live, Some(endpoint)) => endpoint,
        (ContactMode::Live, None) => {
            log::warn!("contact: form has no action endpoint, falling back to demo mode");
            return install_contact_demo(window, form, config);
        }
        (ContactMode::Demo, _) => return install_contact_demo(window, form, config),
    };

    let submit = form
        .query_selector(&config.submit_selector)?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let status = match form.query_selector(&config.status_selector)? {
        Some(el) => Some(el),
        None => document.query_selector(&config.status_selector)?,
    };
    let surface = FormElement {
        form: form.clone(),
        submit,
        status,
        success_class: config.success_class.clone(),
        error_class: config.error_class.clone(),
    };
    let contact = Rc::new(ContactForm::new(surface, FetchTransport, endpoint, ContactCopy::from(config)));
    log::debug!("contact: live submissions to {}", contact.endpoint());

    listen(&form, "submit", move |ev: Event| {
        ev.prevent_default();
        let contact = Rc::clone(&contact);
        wasm_bindgen_futures::spawn_local(async move {
            contact.submit().await;
        });
    })
}

fn install_contact_demo(window: &Window, form: HtmlFormElement, config: &ContactConfig) -> Result<(), FolioError> {
    let demo = DemoForm::new(
        "contact",
        FormElement::bare(form.clone()),
        AlertNotifier(window.clone()),
        config.demo_acknowledgment.clone(),
    );
    listen(&form, "submit", move |ev: Event| {
        ev.prevent_default();
        demo.submit();
    })
}
