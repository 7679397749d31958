//! Render step
//!
//! Applies a `PageState` snapshot to a presentation surface. The crate ships
//! a plain-text renderer used by the command-line replay tool.

use crate::contact::AlertKind;
use crate::page::{PageManifest, PageState};
use std::io::Write;

/// Presentation surface consuming page state snapshots
pub trait Renderer {
    /// Apply one snapshot
    fn render(&mut self, state: &PageState) -> std::io::Result<()>;
}

/// Renders snapshots as human-readable text
pub struct TextRenderer<'a, W: Write> {
    manifest: &'a PageManifest,
    out: W,
}

impl<'a, W: Write> TextRenderer<'a, W> {
    /// Render against a manifest, writing to `out`
    pub fn new(manifest: &'a PageManifest, out: W) -> Self {
        Self { manifest, out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<'_, W> {
    fn render(&mut self, state: &PageState) -> std::io::Result<()> {
        let controls: Vec<String> = self
            .manifest
            .filters
            .iter()
            .enumerate()
            .map(|(index, control)| {
                let id = control.filter.control_id();
                if state.active_control == Some(index) {
                    format!("[{id}]")
                } else {
                    id.to_string()
                }
            })
            .collect();
        writeln!(self.out, "filters: {}", controls.join(" "))?;

        let cards: Vec<String> = self
            .manifest
            .cards
            .iter()
            .zip(&state.cards.card_visible)
            .enumerate()
            .filter(|(_, (_, visible))| **visible)
            .map(|(index, (card, _))| format!("#{index}:{}", card.category))
            .collect();
        writeln!(
            self.out,
            "cards: {} of {} shown [{}]",
            cards.len(),
            self.manifest.cards.len(),
            cards.join(", ")
        )?;
        writeln!(
            self.out,
            "load more: {}",
            if state.cards.load_more_visible { "shown" } else { "hidden" }
        )?;

        let mut chrome = Vec::new();
        if state.header_scrolled {
            chrome.push("header:scrolled".to_string());
        }
        if state.menu_open {
            chrome.push("menu:open".to_string());
        }
        if let Some(item) = state.faq_open {
            chrome.push(format!("faq:{item}"));
        }
        if state.back_to_top_visible {
            chrome.push("back-to-top".to_string());
        }
        if let Some(y) = state.scroll_to {
            chrome.push(format!("scroll-to:{y}"));
        }
        if !state.revealed.is_empty() {
            chrome.push(format!("revealed:{}", state.revealed.join(",")));
        }
        if !chrome.is_empty() {
            writeln!(self.out, "page: {}", chrome.join(" "))?;
        }

        if let Some(label) = &state.submit_label {
            let busy = if state.form_busy { " (disabled)" } else { "" };
            writeln!(self.out, "form: \"{label}\"{busy}")?;
        }
        if let Some(alert) = &state.alert {
            let kind = match alert.kind {
                AlertKind::Success => "success",
                AlertKind::Error => "error",
            };
            writeln!(self.out, "alert[{kind}]: {}", alert.message)?;
        }
        writeln!(self.out)
    }
}
