//! Placeholder forms: acknowledge, reset, no network.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

/// Form element as seen by a demo handler.
pub trait DemoSurface {
    fn field(&self, name: &str) -> Option<String>;
    fn reset(&self);
}

/// Shows a static acknowledgment to the visitor.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// A form whose submission is only acknowledged.
pub struct DemoForm<S, N> {
    name: String,
    surface: S,
    notifier: N,
    acknowledgment: String,
    logged_field: Option<String>,
}

impl<S: DemoSurface, N: Notifier> DemoForm<S, N> {
    pub fn new(name: impl Into<String>, surface: S, notifier: N, acknowledgment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surface,
            notifier,
            acknowledgment: acknowledgment.into(),
            logged_field: None,
        }
    }

    /// Include the value of `field` in the submission log line.
    #[must_use]
    pub fn logging_field(mut self, field: impl Into<String>) -> Self {
        self.logged_field = Some(field.into());
        self
    }

    pub fn submit(&self) {
        match &self.logged_field {
            Some(field) => {
                let value = self.surface.field(field).unwrap_or_default();
                log::info!("{} form submitted: {field}={value}", self.name);
            }
            None => log::info!("{} form submitted", self.name),
        }
        self.notifier.notify(&self.acknowledgment);
        self.surface.reset();
    }
}
