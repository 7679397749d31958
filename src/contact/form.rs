//! Contact form state: submit button and the current alert

use crate::config::ContactSettings;
use crate::contact::response::{FormAlert, SubmissionOutcome, interpret_response};
use tracing::{debug, warn};

/// Contact form state
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    settings: ContactSettings,
    idle_label: String,
    busy: bool,
    alert: Option<FormAlert>,
}

impl ContactForm {
    /// Create an idle form whose button reads `idle_label`
    pub fn new(idle_label: impl Into<String>, settings: ContactSettings) -> Self {
        Self {
            settings,
            idle_label: idle_label.into(),
            busy: false,
            alert: None,
        }
    }

    /// The visitor submitted the form.
    ///
    /// Returns `false` when a submission is already in flight.
    pub fn submit(&mut self) -> bool {
        if self.busy {
            warn!("Contact form submitted while busy; ignoring");
            return false;
        }
        self.busy = true;
        debug!("Contact form submission started");
        true
    }

    /// The host reported the outcome of the in-flight submission.
    ///
    /// Replaces any previous alert and restores the button. Returns `true`
    /// when the form fields should be cleared.
    pub fn complete(&mut self, outcome: &SubmissionOutcome) -> bool {
        let alert = interpret_response(outcome, &self.settings);
        let reset_fields = alert.kind == crate::contact::AlertKind::Success;
        self.alert = Some(alert);
        self.busy = false;
        reset_fields
    }

    /// The alert timed out
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Whether a submission is in flight (button disabled)
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Current submit button text
    pub fn button_label(&self) -> &str {
        if self.busy {
            &self.settings.sending_label
        } else {
            &self.idle_label
        }
    }

    /// Alert currently shown, if any
    pub fn alert(&self) -> Option<&FormAlert> {
        self.alert.as_ref()
    }
}
