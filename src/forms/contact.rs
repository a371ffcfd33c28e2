//! Live contact-form submission.
//!
//! A submission moves `Idle -> Submitting -> {Succeeded, Failed}` and the
//! next submit starts over from there. The network call goes through a
//! [`FormTransport`] that returns a tagged `Result`, so the whole cycle runs
//! under test without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (non-success status or no response at all) becomes the
//! configured error message. The submit control is re-enabled and relabelled
//! on every exit path, including the future being dropped mid-flight.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::{Cell, OnceCell};

use futures::future::LocalBoxFuture;

use super::FormFields;
use crate::config::ContactConfig;
use crate::error::SubmitError;

/// Phase of the submission state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Text shown in the form's status placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Form element, its submit control, and its status placeholder.
pub trait ContactSurface {
    fn fields(&self) -> FormFields;
    fn submit_label(&self) -> String;
    fn set_submit_label(&self, text: &str);
    fn set_submit_enabled(&self, enabled: bool);
    /// Show `status`, or clear the placeholder when `None`.
    fn show_status(&self, status: Option<&StatusMessage>);
    fn reset(&self);
}

/// Sends a form-encoded POST and reports only success or failure.
pub trait FormTransport {
    fn post(&self, endpoint: &str, fields: FormFields) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Copy used while submitting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactCopy {
    pub pending_label: String,
    pub success_message: String,
    pub error_message: String,
}

impl From<&ContactConfig> for ContactCopy {
    fn from(config: &ContactConfig) -> Self {
        Self {
            pending_label: config.pending_label.clone(),
            success_message: config.success_message.clone(),
            error_message: config.error_message.clone(),
        }
    }
}

/// Contact form wired to a live endpoint.
pub struct ContactForm<S, T> {
    surface: S,
    transport: T,
    endpoint: String,
    copy: ContactCopy,
    phase: Cell<SubmitPhase>,
    idle_label: OnceCell<String>,
}

impl<S: ContactSurface, T: FormTransport> ContactForm<S, T> {
    pub fn new(surface: S, transport: T, endpoint: impl Into<String>, copy: ContactCopy) -> Self {
        Self {
            surface,
            transport,
            endpoint: endpoint.into(),
            copy,
            phase: Cell::new(SubmitPhase::Idle),
            idle_label: OnceCell::new(),
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one submission attempt to completion and return the final phase.
    ///
    /// Overlapping submissions are not deduplicated; each one posts. The
    /// disabled submit control is the only mitigation.
    pub async fn submit(&self) -> SubmitPhase {
        // Read before the first transition so the pending label is never
        // mistaken for the original.
        let label = self.idle_label.get_or_init(|| self.surface.submit_label()).clone();
        self.phase.set(SubmitPhase::Submitting);

        let guard = RestoreControl {
            surface: &self.surface,
            label,
            phase: &self.phase,
        };
        self.surface.set_submit_enabled(false);
        self.surface.set_submit_label(&self.copy.pending_label);
        self.surface.show_status(None);

        let fields = self.surface.fields();
        log::info!("contact: submitting {} fields to {}", fields.len(), self.endpoint);

        let phase = match self.transport.post(&self.endpoint, fields).await {
            Ok(()) => {
                self.surface.show_status(Some(&StatusMessage {
                    kind: StatusKind::Success,
                    text: self.copy.success_message.clone(),
                }));
                self.surface.reset();
                SubmitPhase::Succeeded
            }
            Err(err) => {
                log::warn!("contact: {err}");
                self.surface.show_status(Some(&StatusMessage {
                    kind: StatusKind::Error,
                    text: self.copy.error_message.clone(),
                }));
                SubmitPhase::Failed
            }
        };
        self.phase.set(phase);
        drop(guard);
        phase
    }
}

/// Re-enables the submit control and restores its label when dropped.
struct RestoreControl<'a, S: ContactSurface> {
    surface: &'a S,
    label: String,
    phase: &'a Cell<SubmitPhase>,
}

impl<S: ContactSurface> Drop for RestoreControl<'_, S> {
    fn drop(&mut self) {
        self.surface.set_submit_enabled(true);
        self.surface.set_submit_label(&self.label);
        if self.phase.get() == SubmitPhase::Submitting {
            // Dropped before the transport resolved.
            self.phase.set(SubmitPhase::Idle);
        }
    }
}
