//! Contact form response interpretation
//!
//! The form is posted by the host page. This module only turns whatever
//! came back into the single alert the visitor sees.

use crate::config::ContactSettings;
use serde::Deserialize;
use tracing::{debug, warn};

/// What the host observed after posting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The endpoint answered
    Response {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
    /// The request never completed
    TransportFailure(String),
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Message sent
    Success,
    /// Message not sent
    Error,
}

/// User-visible feedback for a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormAlert {
    /// Severity, drives styling
    pub kind: AlertKind,
    /// Text shown to the visitor
    pub message: String,
}

/// Error body returned by the form endpoint
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    #[serde(default)]
    message: String,
}

/// Map a submission outcome to the alert to display
pub fn interpret_response(outcome: &SubmissionOutcome, settings: &ContactSettings) -> FormAlert {
    let generic_error = || FormAlert {
        kind: AlertKind::Error,
        message: settings.error_message.clone(),
    };

    match outcome {
        SubmissionOutcome::Response { status, .. } if (200..300).contains(status) => {
            debug!("Contact form accepted with status {}", status);
            FormAlert {
                kind: AlertKind::Success,
                message: settings.success_message.clone(),
            }
        }
        SubmissionOutcome::Response { status, body } => {
            warn!("Contact form rejected with status {}", status);
            match serde_json::from_str::<ErrorBody>(body) {
                Ok(ErrorBody {
                    errors: Some(errors),
                }) => {
                    let details = errors
                        .iter()
                        .map(|error| error.message.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    FormAlert {
                        kind: AlertKind::Error,
                        message: format!("{}{details}", settings.error_prefix),
                    }
                }
                Ok(_) => generic_error(),
                Err(e) => {
                    debug!("Unreadable error body: {}", e);
                    generic_error()
                }
            }
        }
        SubmissionOutcome::TransportFailure(reason) => {
            warn!("Contact form submission failed: {}", reason);
            generic_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> SubmissionOutcome {
        SubmissionOutcome::Response {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_success() {
        let settings = ContactSettings::default();
        let alert = interpret_response(&response(200, ""), &settings);
        assert_eq!(alert.kind, AlertKind::Success);
        assert_eq!(alert.message, settings.success_message);
    }

    #[test]
    fn test_error_messages_are_joined() {
        let body = r#"{"errors":[{"field":"email","message":"should be an email"},{"message":"is required"}]}"#;
        let alert = interpret_response(&response(422, body), &ContactSettings::default());
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.message, "Erreur: should be an email, is required");
    }

    #[test]
    fn test_error_without_errors_array() {
        let settings = ContactSettings::default();
        let alert = interpret_response(&response(500, r#"{"ok":false}"#), &settings);
        assert_eq!(alert.message, settings.error_message);
    }

    #[test]
    fn test_unparseable_body_and_transport_failure() {
        let settings = ContactSettings::default();
        let alert = interpret_response(&response(502, "<html>Bad Gateway</html>"), &settings);
        assert_eq!(alert.message, settings.error_message);

        let alert = interpret_response(
            &SubmissionOutcome::TransportFailure("connection reset".to_string()),
            &settings,
        );
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.message, settings.error_message);
    }
}
