//! Page configuration: element identifiers, class markers, copy, and
//! feature switches.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every behavior is constructed from this struct instead of looking up
//! hard-coded identifiers. Defaults match the shipped markup; a page can
//! override any subset through an embedded JSON block (see
//! [`CONFIG_ELEMENT_ID`]).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::FolioError;

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Complete configuration for one page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub reveal: RevealConfig,
    pub filter: FilterConfig,
    pub year: YearConfig,
    pub nav: NavConfig,
    pub newsletter: NewsletterConfig,
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] when the text is not valid JSON or a
    /// field has the wrong shape.
    pub fn from_json(raw: &str) -> Result<Self, FolioError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

/// Theme controller wiring.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
    pub label_id: String,
    /// Optional control that forgets the explicit choice.
    pub reset_id: String,
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "portfolio-theme".to_owned(),
            attribute: "data-theme".to_owned(),
            toggle_id: "theme-toggle".to_owned(),
            label_id: "theme-toggle-label".to_owned(),
            reset_id: "theme-reset".to_owned(),
            media_query: "(prefers-color-scheme: dark)".to_owned(),
        }
    }
}

/// One section revealed on scroll and the marker it receives.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RevealSection {
    pub id: String,
    pub class: String,
}

/// Reveal-on-scroll wiring.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub root_margin: String,
    pub threshold: f64,
    pub sections: Vec<RevealSection>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            root_margin: "0px 0px 80px 0px".to_owned(),
            threshold: 0.0,
            sections: vec![
                RevealSection { id: "about".to_owned(), class: "about-visible".to_owned() },
                RevealSection { id: "portfolio".to_owned(), class: "portfolio-visible".to_owned() },
            ],
        }
    }
}

/// Portfolio filter wiring.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub button_selector: String,
    pub gallery_selector: String,
    pub card_selector: String,
    pub filter_attribute: String,
    pub category_attribute: String,
    pub active_class: String,
    pub hidden_class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            button_selector: ".portfolio-filter-btn".to_owned(),
            gallery_selector: ".portfolio-gallery".to_owned(),
            card_selector: ".project-card-link".to_owned(),
            filter_attribute: "data-filter".to_owned(),
            category_attribute: "data-category".to_owned(),
            active_class: "is-active".to_owned(),
            hidden_class: "is-hidden".to_owned(),
        }
    }
}

/// Footer year placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct YearConfig {
    pub element_id: String,
}

impl Default for YearConfig {
    fn default() -> Self {
        Self { element_id: "year".to_owned() }
    }
}

/// Navigation highlighter wiring (blog page variant).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub enabled: bool,
    pub blog_anchor: String,
    pub home_selector: String,
    pub blog_selector: String,
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            blog_anchor: "#blog".to_owned(),
            home_selector: "[data-nav=\"home\"]".to_owned(),
            blog_selector: "[data-nav=\"blog\"]".to_owned(),
            active_class: "active".to_owned(),
        }
    }
}

/// Newsletter demo form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewsletterConfig {
    pub form_selector: String,
    pub email_field: String,
    pub acknowledgment: String,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            form_selector: ".newsletter-form".to_owned(),
            email_field: "email".to_owned(),
            acknowledgment: "Thanks! We'll keep you updated. (This is a demo: connect a backend to save emails.)"
                .to_owned(),
        }
    }
}

/// How the contact form handles a submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMode {
    /// Acknowledge and reset, no network.
    Demo,
    /// POST to the form's `action` endpoint.
    #[default]
    Live,
}

/// Contact form wiring and copy.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_selector: String,
    pub mode: ContactMode,
    pub submit_selector: String,
    pub status_selector: String,
    pub success_class: String,
    pub error_class: String,
    pub pending_label: String,
    pub success_message: String,
    pub error_message: String,
    pub demo_acknowledgment: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_selector: ".contact-form".to_owned(),
            mode: ContactMode::Live,
            submit_selector: "button[type=\"submit\"]".to_owned(),
            status_selector: ".form-message".to_owned(),
            success_class: "form-message--success".to_owned(),
            error_class: "form-message--error".to_owned(),
            pending_label: "Sending...".to_owned(),
            success_message: "Thanks! Your message has been sent. I'll get back to you soon.".to_owned(),
            error_message: "Something went wrong. Please try again, or email me directly.".to_owned(),
            demo_acknowledgment: "Message sent! (This is a demo: connect a backend to handle submissions.)"
                .to_owned(),
        }
    }
}
