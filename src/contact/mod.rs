//! Contact form feedback
//!
//! Tracks the submit button's busy state and turns the outcome reported by
//! the host page into a single alert. Sending the request is the host's job.

pub mod form;
pub mod response;

pub use form::ContactForm;
pub use response::{AlertKind, FormAlert, SubmissionOutcome, interpret_response};
