//! Error types shared by the behavior cores and the browser glue.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Glue code returns [`FolioError`] so `boot` can log
//! and skip a behavior; contact submission returns [`SubmitError`] so the
//! form can turn a failure into a visible status message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while wiring a behavior to the page.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// A browser capability (storage, observer, media query) is missing.
    #[error("browser capability unavailable: {0}")]
    Unavailable(&'static str),
    /// A DOM or JS call was rejected.
    #[error("javascript error: {0}")]
    Js(String),
    /// The page-embedded configuration could not be parsed.
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Failed contact submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("submission rejected with status {0}")]
    Rejected(u16),
    /// The request never produced a response.
    #[error("submission failed: {0}")]
    Network(String),
}
