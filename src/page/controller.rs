//! Page controller implementation
//!
//! Owns every page component, dispatches events to them and publishes a
//! state snapshot to the presentation layer after each event.

use crate::config::ShowcaseConfig;
use crate::contact::{ContactForm, FormAlert};
use crate::filter::{FilterController, VisibilityState};
use crate::map::MapWidget;
use crate::page::{PageEvent, PageManifest};
use crate::widgets::{BackToTop, FaqAccordion, HeaderState, NavMenu, ScrollReveal, resolve_anchor};
use std::sync::mpsc;
use tracing::{debug, info, warn};

/// Page state snapshot for the render step
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    /// Card and "load more" visibility
    pub cards: VisibilityState,
    /// Identifier of the active filter
    pub active_filter: String,
    /// Index of the filter control marked active
    pub active_control: Option<usize>,
    /// Header shows its compact look
    pub header_scrolled: bool,
    /// Mobile menu expanded
    pub menu_open: bool,
    /// Expanded FAQ item
    pub faq_open: Option<usize>,
    /// Back-to-top button shown
    pub back_to_top_visible: bool,
    /// Reveal targets already revealed
    pub revealed: Vec<String>,
    /// Contact form in flight
    pub form_busy: bool,
    /// Contact form submit button text
    pub submit_label: Option<String>,
    /// Contact form alert
    pub alert: Option<FormAlert>,
    /// Smooth-scroll target requested by the last event
    pub scroll_to: Option<f64>,
    /// Whether the last event asked the host to clear the form fields
    pub reset_form: bool,
}

/// Page behavior controller
pub struct PageController {
    /// Page configuration
    config: ShowcaseConfig,
    /// Static page description
    manifest: PageManifest,
    /// Project filter and pagination
    filter: FilterController,
    /// Sticky header
    header: HeaderState,
    /// Mobile menu
    menu: NavMenu,
    /// FAQ accordion
    faq: FaqAccordion,
    /// Back-to-top button
    back_to_top: BackToTop,
    /// Reveal-on-scroll
    reveal: ScrollReveal,
    /// Contact form, when the page has one
    contact: Option<ContactForm>,
    /// Map descriptor, when the page embeds the map
    map: Option<MapWidget>,
    /// One-shot outputs of the event being handled
    scroll_to: Option<f64>,
    reset_form: bool,
    /// State sender to the render step
    state_sender: mpsc::Sender<PageState>,
}

impl PageController {
    /// Build every component from configuration and the page manifest
    pub fn new(
        config: ShowcaseConfig,
        manifest: PageManifest,
        state_sender: mpsc::Sender<PageState>,
    ) -> Self {
        let filter = FilterController::new(
            manifest.cards.clone(),
            manifest.filters.iter().cloned(),
            config.pagination,
            manifest.load_more,
        );
        let contact = manifest
            .submit_label
            .as_ref()
            .map(|label| ContactForm::new(label.clone(), config.contact.clone()));
        let map = manifest.map.then(|| MapWidget::from_settings(&config.map));

        info!(
            "Page controller ready: {} cards, {} FAQ items, {} reveal targets",
            manifest.cards.len(),
            manifest.faq_items,
            manifest.reveal_targets.len()
        );

        Self {
            filter,
            header: HeaderState::new(config.header),
            menu: NavMenu::default(),
            faq: FaqAccordion::new(manifest.faq_items),
            back_to_top: BackToTop::new(config.back_to_top),
            reveal: ScrollReveal::new(manifest.reveal_targets.clone(), config.reveal),
            contact,
            map,
            scroll_to: None,
            reset_form: false,
            config,
            manifest,
            state_sender,
        }
    }

    /// Drain events until every sender is dropped.
    ///
    /// Events are handled strictly one at a time, in arrival order.
    pub fn run(&mut self, events: &mpsc::Receiver<PageEvent>) {
        info!("Entering page event loop");
        while let Ok(event) = events.recv() {
            self.handle_event(event);
        }
        info!("Page event channel disconnected; event loop exited");
    }

    /// Apply one event and publish the resulting state
    pub fn handle_event(&mut self, event: PageEvent) {
        debug!("Handling page event: {:?}", event);
        self.scroll_to = None;
        self.reset_form = false;

        match event {
            PageEvent::FilterSelected(id) => {
                self.filter.select_control(&id);
            }
            PageEvent::LoadMore => {
                self.filter.load_more();
            }
            PageEvent::Scrolled(y) => {
                self.header.on_scroll(y);
                self.back_to_top.on_scroll(y);
            }
            PageEvent::ViewportMeasured {
                tops,
                viewport_height,
            } => {
                self.reveal.on_viewport(&tops, viewport_height);
            }
            PageEvent::MenuToggled => self.menu.toggle(),
            PageEvent::NavLinkClicked => self.menu.link_clicked(),
            PageEvent::FaqToggled(index) => self.faq.toggle(index),
            PageEvent::AnchorClicked(href) => {
                self.scroll_to = resolve_anchor(&href, &self.manifest.sections, self.config.anchors);
                if self.scroll_to.is_some() {
                    self.menu.link_clicked();
                }
            }
            PageEvent::BackToTopClicked => {
                self.scroll_to = Some(self.back_to_top.activate());
            }
            PageEvent::FormSubmitted => match self.contact.as_mut() {
                Some(form) => {
                    form.submit();
                }
                None => warn!("Form submitted but the page has no contact form"),
            },
            PageEvent::FormCompleted(outcome) => match self.contact.as_mut() {
                Some(form) => self.reset_form = form.complete(&outcome),
                None => warn!("Form completion but the page has no contact form"),
            },
            PageEvent::AlertDismissed => {
                if let Some(form) = self.contact.as_mut() {
                    form.dismiss_alert();
                }
            }
        }

        self.send_state_update();
    }

    /// Publish the initial state so the page renders before any input
    pub fn send_initial_state(&self) {
        info!("Sending initial page state");
        self.send_state_update();
    }

    /// Snapshot of every component
    pub fn state(&self) -> PageState {
        PageState {
            cards: self.filter.visibility().clone(),
            active_filter: self.filter.active_filter().control_id().to_string(),
            active_control: self.filter.active_control(),
            header_scrolled: self.header.is_scrolled(),
            menu_open: self.menu.is_open(),
            faq_open: self.faq.open_item(),
            back_to_top_visible: self.back_to_top.is_visible(),
            revealed: self
                .reveal
                .states()
                .filter(|(_, revealed)| *revealed)
                .map(|(id, _)| id.to_string())
                .collect(),
            form_busy: self.contact.as_ref().is_some_and(ContactForm::is_busy),
            submit_label: self
                .contact
                .as_ref()
                .map(|form| form.button_label().to_string()),
            alert: self.contact.as_ref().and_then(|form| form.alert().cloned()),
            scroll_to: self.scroll_to,
            reset_form: self.reset_form,
        }
    }

    /// Send the current state to the render step
    fn send_state_update(&self) {
        let state = self.state();
        if let Err(e) = self.state_sender.send(state) {
            warn!("Failed to send page state to renderer: {}", e);
        }
    }

    /// Project filter controller
    pub fn filter(&self) -> &FilterController {
        &self.filter
    }

    /// Static page description
    pub fn manifest(&self) -> &PageManifest {
        &self.manifest
    }

    /// Map descriptor, when the page embeds the map
    pub fn map(&self) -> Option<&MapWidget> {
        self.map.as_ref()
    }
}
