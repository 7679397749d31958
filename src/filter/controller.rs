//! Filter controller implementation
//!
//! Owns the card collection, the active filter and the reveal count, and
//! derives which cards are visible from them.

use crate::config::PaginationSettings;
use crate::filter::models::{Card, Filter, FilterControl};
use smallvec::SmallVec;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Visibility applied to the page after the last transition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibilityState {
    /// One flag per card, in document order
    pub card_visible: Vec<bool>,
    /// Whether the "load more" control is shown
    pub load_more_visible: bool,
}

impl VisibilityState {
    /// Indices of the visible cards, in document order
    pub fn visible_indices(&self) -> Vec<usize> {
        self.card_visible
            .iter()
            .enumerate()
            .filter_map(|(index, visible)| visible.then_some(index))
            .collect()
    }

    /// Number of visible cards
    pub fn visible_count(&self) -> usize {
        self.card_visible.iter().filter(|visible| **visible).count()
    }
}

/// Project filter and progressive disclosure controller
#[derive(Debug, Clone)]
pub struct FilterController {
    /// Cards in document order, fixed at construction
    cards: Vec<Card>,
    /// Filter buttons in page order
    controls: SmallVec<[FilterControl; 8]>,
    /// Currently selected filter
    active_filter: Filter,
    /// Requested number of matching cards to disclose; may exceed the match count
    reveal_count: usize,
    /// Page size and increment
    pagination: PaginationSettings,
    /// Whether the page carries a "load more" control at all
    has_load_more: bool,
    /// Result of the last recompute
    visibility: VisibilityState,
}

impl FilterController {
    /// Create a controller over a fixed card list and filter controls.
    ///
    /// Starts on [`Filter::All`] with the initial page size revealed.
    /// Zero page sizes are replaced by the defaults.
    pub fn new(
        cards: Vec<Card>,
        controls: impl IntoIterator<Item = FilterControl>,
        pagination: PaginationSettings,
        has_load_more: bool,
    ) -> Self {
        let pagination = pagination.sanitized();
        let mut controller = Self {
            cards,
            controls: controls.into_iter().collect(),
            active_filter: Filter::All,
            reveal_count: pagination.initial_page_size,
            pagination,
            has_load_more,
            visibility: VisibilityState::default(),
        };
        controller.recompute_visibility();
        debug!(
            "Filter controller initialized with {} cards and {} controls",
            controller.cards.len(),
            controller.controls.len()
        );
        controller
    }

    /// Build a controller from bare category tags.
    ///
    /// Creates an `all` control followed by one control per distinct
    /// category (sorted) and a "load more" control.
    pub fn from_categories<S: AsRef<str>>(categories: &[S], pagination: PaginationSettings) -> Self {
        let cards: Vec<Card> = categories
            .iter()
            .map(|category| Card::new(category.as_ref()))
            .collect();
        let distinct: BTreeSet<_> = cards.iter().map(|card| card.category.clone()).collect();
        let controls = std::iter::once(FilterControl::new(Filter::All)).chain(
            distinct
                .into_iter()
                .map(|category| FilterControl::new(Filter::Category(category))),
        );
        Self::new(cards, controls, pagination, true)
    }

    /// Select a filter and reset pagination to the initial page size.
    ///
    /// The filter is expected to belong to one of the page's controls; a
    /// filter without a control still applies but leaves no control marked.
    pub fn select_filter(&mut self, filter: Filter) -> &VisibilityState {
        if !self.controls.is_empty() && !self.controls.iter().any(|c| c.filter == filter) {
            warn!("Filter '{}' has no control on this page", filter);
        }

        debug!(
            "Filter changed: '{}' -> '{}'",
            self.active_filter, filter
        );
        self.active_filter = filter;
        self.reveal_count = self.pagination.initial_page_size;
        self.recompute_visibility()
    }

    /// Select the filter belonging to a control identifier.
    ///
    /// Returns `false` and leaves state untouched when no control carries
    /// that identifier.
    pub fn select_control(&mut self, control_id: &str) -> bool {
        let Some(filter) = self
            .controls
            .iter()
            .find(|control| control.filter.control_id() == control_id)
            .map(|control| control.filter.clone())
        else {
            warn!("Ignoring activation of unknown filter control '{}'", control_id);
            return false;
        };
        self.select_filter(filter);
        true
    }

    /// Reveal the next page of matching cards.
    ///
    /// No-op when the "load more" control is absent or hidden.
    pub fn load_more(&mut self) -> &VisibilityState {
        if !self.visibility.load_more_visible {
            debug!("Load more ignored: affordance not shown");
            return &self.visibility;
        }

        self.reveal_count = self.reveal_count.saturating_add(self.pagination.page_increment);
        debug!(
            "Load more: reveal count now {} of {} matches",
            self.reveal_count,
            self.match_count()
        );
        self.recompute_visibility()
    }

    /// Recompute card and affordance visibility from the current state.
    ///
    /// A card is visible iff it matches the active filter and its rank among
    /// matching cards is below the reveal count.
    pub fn recompute_visibility(&mut self) -> &VisibilityState {
        let mut rank = 0;
        let card_visible = self
            .cards
            .iter()
            .map(|card| {
                if !self.active_filter.matches(card) {
                    return false;
                }
                let visible = rank < self.reveal_count;
                rank += 1;
                visible
            })
            .collect();

        self.visibility = VisibilityState {
            card_visible,
            load_more_visible: self.has_load_more && self.reveal_count < rank,
        };
        &self.visibility
    }

    /// Visibility applied by the last transition
    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    /// Currently selected filter
    pub fn active_filter(&self) -> &Filter {
        &self.active_filter
    }

    /// Index of the control marked active, if the active filter has one
    pub fn active_control(&self) -> Option<usize> {
        self.controls
            .iter()
            .position(|control| control.filter == self.active_filter)
    }

    /// Filter controls in page order
    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    /// Cards in document order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Requested reveal count (can exceed [`Self::match_count`] after the last page)
    pub fn reveal_count(&self) -> usize {
        self.reveal_count
    }

    /// Number of cards matching the active filter
    pub fn match_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| self.active_filter.matches(card))
            .count()
    }

    /// Number of cards actually disclosed: `min(reveal_count, match_count)`
    pub fn visible_count(&self) -> usize {
        self.reveal_count.min(self.match_count())
    }
}
