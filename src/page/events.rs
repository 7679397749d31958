//! Page events
//!
//! One variant per user input the page reacts to. The host registers a
//! listener per control and forwards each activation as a `PageEvent`.

use crate::contact::SubmissionOutcome;
use crate::error::ShowcaseError;
use std::str::FromStr;

/// A discrete user input
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// A filter button was activated
    FilterSelected(String),
    /// The "load more" button was activated
    LoadMore,
    /// The window scrolled to this vertical offset
    Scrolled(f64),
    /// Reveal targets were measured: top edge of each target, viewport height
    ViewportMeasured {
        /// Top edge of each reveal target, in manifest order
        tops: Vec<f64>,
        /// Viewport height
        viewport_height: f64,
    },
    /// The hamburger button was activated
    MenuToggled,
    /// A navigation link was followed
    NavLinkClicked,
    /// The question of this FAQ item was activated
    FaqToggled(usize),
    /// An in-page link was followed
    AnchorClicked(String),
    /// The back-to-top button was activated
    BackToTopClicked,
    /// The contact form was submitted
    FormSubmitted,
    /// The host finished posting the contact form
    FormCompleted(SubmissionOutcome),
    /// The contact form alert timed out
    AlertDismissed,
}

/// Parses the compact `name[:argument]` syntax used on the command line:
///
/// `filter:<id>`, `more`, `scroll:<y>`, `menu`, `link`, `faq:<index>`,
/// `anchor:<href>`, `top`, `submit`, `response:<status>[:<body>]`,
/// `offline`, `dismiss`.
impl FromStr for PageEvent {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ShowcaseError::InvalidEvent(s.to_string());
        let (name, argument) = match s.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (s, None),
        };

        let event = match (name, argument) {
            ("filter", Some(id)) => Self::FilterSelected(id.to_string()),
            ("more", None) => Self::LoadMore,
            ("scroll", Some(y)) => Self::Scrolled(y.parse().map_err(|_| invalid())?),
            ("menu", None) => Self::MenuToggled,
            ("link", None) => Self::NavLinkClicked,
            ("faq", Some(index)) => Self::FaqToggled(index.parse().map_err(|_| invalid())?),
            ("anchor", Some(href)) => Self::AnchorClicked(href.to_string()),
            ("top", None) => Self::BackToTopClicked,
            ("submit", None) => Self::FormSubmitted,
            ("response", Some(rest)) => {
                let (status, body) = rest.split_once(':').unwrap_or((rest, ""));
                Self::FormCompleted(SubmissionOutcome::Response {
                    status: status.parse().map_err(|_| invalid())?,
                    body: body.to_string(),
                })
            }
            ("offline", None) => {
                Self::FormCompleted(SubmissionOutcome::TransportFailure("offline".to_string()))
            }
            ("dismiss", None) => Self::AlertDismissed,
            _ => return Err(invalid()),
        };
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_events() {
        assert_eq!("more".parse::<PageEvent>().unwrap(), PageEvent::LoadMore);
        assert_eq!(
            "filter:residential".parse::<PageEvent>().unwrap(),
            PageEvent::FilterSelected("residential".to_string())
        );
        assert_eq!(
            "faq:2".parse::<PageEvent>().unwrap(),
            PageEvent::FaqToggled(2)
        );
        assert_eq!(
            "anchor:#contact".parse::<PageEvent>().unwrap(),
            PageEvent::AnchorClicked("#contact".to_string())
        );
    }

    #[test]
    fn test_parse_response_keeps_colons_in_body() {
        let event: PageEvent = r#"response:422:{"errors":[{"message":"a:b"}]}"#.parse().unwrap();
        assert_eq!(
            event,
            PageEvent::FormCompleted(SubmissionOutcome::Response {
                status: 422,
                body: r#"{"errors":[{"message":"a:b"}]}"#.to_string(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "more:1", "scroll:up", "faq", "faq:-1", "response:abc", "jump"] {
            assert!(
                matches!(input.parse::<PageEvent>(), Err(ShowcaseError::InvalidEvent(_))),
                "{input:?} should be rejected"
            );
        }
    }
}
