//! Error types for the showcase page engine
//!
//! The page components themselves are total state machines and never fail.
//! Errors only arise at the edges: loading configuration, reading the page
//! manifest, and initializing logging.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the showcase engine
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Page manifest could not be read
    /// Preserves the underlying error source for full error chain transparency
    #[error("Page manifest error: {0}")]
    ManifestError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Page manifest was readable but describes an impossible page
    #[error("Invalid page manifest: {0}")]
    InvalidManifest(String),

    /// A page event could not be parsed
    #[error("Invalid page event: {0}")]
    InvalidEvent(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for showcase operations
pub type Result<T> = std::result::Result<T, ShowcaseError>;

/// Convert an error to a user-friendly message
///
/// Returns a message suitable for printing to the operator of the CLI,
/// with a short troubleshooting hint.
pub fn get_user_friendly_error(error: &ShowcaseError) -> String {
    match error {
        ShowcaseError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Default settings will be used.\n\
             Check that SHOWCASE_HOME points to a writable directory."
            .to_string(),
        ShowcaseError::ManifestError(e) => {
            format!(
                "The page manifest could not be read:\n\n{e}\n\n\
                 Check the path passed on the command line."
            )
        }
        ShowcaseError::InvalidManifest(reason) => {
            format!(
                "The page manifest is invalid: {reason}\n\n\
                 Every filter control must have a unique identifier and \
                 exactly one control must be \"all\"."
            )
        }
        ShowcaseError::InvalidEvent(event) => {
            format!(
                "Unrecognized event \"{event}\".\n\n\
                 Expected one of: filter:<id>, more, scroll:<y>, menu, link, faq:<n>, \
                 anchor:<href>, top, submit, response:<status>[:<body>], offline, dismiss."
            )
        }
        ShowcaseError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        ShowcaseError::JsonError(e) => {
            format!(
                "A JSON document is malformed:\n\n{e}\n\n\
                 Fix the file or delete it to fall back to defaults."
            )
        }
    }
}
