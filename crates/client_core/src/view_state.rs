//! View state and its reducer.
//!
//! [`CoordinatorState::reduce`] is the only place the displayed result is
//! written. It applies one [`Event`] and returns the [`Effect`]s the owner
//! task must run. Fetch results carry the ticket they were issued with.
//! Search results and failures apply only for the latest ticket; a catalog
//! success applies when it is newer than the catalog already applied.

use std::sync::Arc;

use shared::{domain::Section, protocol::SearchQuery};
use tracing::{debug, warn};

use crate::catalog_store::CatalogStore;

pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LoadingInitial,
    Ready,
    LoadingRefreshOrSearch,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFetchKind {
    Initial,
    Refresh,
}

/// Immutable snapshot published to presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub displayed_sections: Arc<Vec<Section>>,
    pub selected_type: Option<String>,
    pub search_text: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub content_type_labels: Arc<Vec<String>>,
    pub phase: Phase,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            displayed_sections: Arc::new(Vec::new()),
            selected_type: None,
            search_text: String::new(),
            is_loading: false,
            error_message: None,
            content_type_labels: Arc::new(Vec::new()),
            phase: Phase::Idle,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    Start,
    SelectType(Option<String>),
    ChangeSearchText(String),
    SearchSettled(String),
    Refresh,
    CatalogFetched {
        ticket: Ticket,
        kind: CatalogFetchKind,
        result: Result<Vec<Section>, String>,
    },
    SearchFetched {
        ticket: Ticket,
        result: Result<Vec<Section>, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCatalog {
        ticket: Ticket,
        kind: CatalogFetchKind,
    },
    Search {
        ticket: Ticket,
        query: SearchQuery,
    },
    Debounce(String),
}

#[derive(Debug, Default)]
pub struct CoordinatorState {
    store: CatalogStore,
    selected_type: Option<String>,
    search_text: String,
    displayed: Arc<Vec<Section>>,
    error_message: Option<String>,
    in_flight: usize,
    next_ticket: Ticket,
    latest_catalog: Option<Ticket>,
    applied_catalog: Option<Ticket>,
    latest_search: Option<Ticket>,
    catalog_loaded: bool,
    started: bool,
    search_limit: Option<u32>,
}

impl CoordinatorState {
    pub fn new(search_limit: Option<u32>) -> Self {
        Self {
            search_limit,
            ..Self::default()
        }
    }

    pub fn reduce(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Start => {
                if self.started {
                    warn!("coordinator already started; ignoring start");
                    return Vec::new();
                }
                self.started = true;
                vec![self.issue_catalog_fetch(CatalogFetchKind::Initial)]
            }
            Event::SelectType(selected_type) => {
                self.selected_type = selected_type;
                // While a search is active its results own the display.
                if is_blank(&self.search_text) {
                    self.show_filtered_base();
                }
                Vec::new()
            }
            Event::ChangeSearchText(text) => {
                self.search_text = text.clone();
                vec![Effect::Debounce(text)]
            }
            Event::SearchSettled(text) => {
                if is_blank(&text) {
                    if let Some(ticket) = self.latest_search.take() {
                        debug!(ticket, "search cleared; outstanding result will be ignored");
                    }
                    self.show_filtered_base();
                    Vec::new()
                } else {
                    vec![self.issue_search(text)]
                }
            }
            Event::Refresh => vec![self.issue_catalog_fetch(CatalogFetchKind::Refresh)],
            Event::CatalogFetched {
                ticket,
                kind,
                result,
            } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                let is_latest = self.latest_catalog == Some(ticket);
                match result {
                    // A success newer than the applied catalog lands even when a
                    // later fetch is still outstanding; only the latest may fail.
                    Ok(sections) if self.is_newer_catalog(ticket) => {
                        self.applied_catalog = Some(ticket);
                        self.apply_catalog(kind, sections, is_latest)
                    }
                    Err(cause) if is_latest => {
                        self.report_catalog_failure(kind, cause);
                        Vec::new()
                    }
                    _ => {
                        debug!(ticket, ?kind, "discarding superseded catalog result");
                        Vec::new()
                    }
                }
            }
            Event::SearchFetched { ticket, result } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if self.latest_search != Some(ticket) {
                    debug!(ticket, "discarding superseded search result");
                    return Vec::new();
                }
                match result {
                    Ok(sections) => self.displayed = Arc::new(sections),
                    Err(cause) => {
                        self.error_message = Some(format!("Error searching: {cause}"));
                        self.displayed = Arc::new(Vec::new());
                    }
                }
                Vec::new()
            }
        }
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            displayed_sections: Arc::clone(&self.displayed),
            selected_type: self.selected_type.clone(),
            search_text: self.search_text.clone(),
            is_loading: self.in_flight > 0,
            error_message: self.error_message.clone(),
            content_type_labels: self.store.content_type_labels(),
            phase: self.phase(),
        }
    }

    fn phase(&self) -> Phase {
        if !self.started {
            Phase::Idle
        } else if self.in_flight > 0 {
            if self.catalog_loaded {
                Phase::LoadingRefreshOrSearch
            } else {
                Phase::LoadingInitial
            }
        } else if self.error_message.is_some() {
            Phase::Error
        } else {
            Phase::Ready
        }
    }

    fn apply_catalog(
        &mut self,
        kind: CatalogFetchKind,
        sections: Vec<Section>,
        is_latest: bool,
    ) -> Vec<Effect> {
        self.store.replace(sections);
        self.catalog_loaded = true;
        if is_latest {
            self.error_message = None;
        }
        // Search results own the display only once a search has been issued.
        if is_blank(&self.search_text) || self.latest_search.is_none() {
            self.show_filtered_base();
            Vec::new()
        } else if kind == CatalogFetchKind::Refresh && is_latest {
            vec![self.issue_search(self.search_text.clone())]
        } else {
            Vec::new()
        }
    }

    fn report_catalog_failure(&mut self, kind: CatalogFetchKind, cause: String) {
        match kind {
            CatalogFetchKind::Initial => {
                self.error_message = Some(format!("Error fetching home sections: {cause}"));
                self.displayed = Arc::new(Vec::new());
            }
            CatalogFetchKind::Refresh => {
                self.error_message = Some(format!("Error refreshing data: {cause}"));
            }
        }
    }

    fn is_newer_catalog(&self, ticket: Ticket) -> bool {
        self.applied_catalog.map_or(true, |applied| ticket > applied)
    }

    fn show_filtered_base(&mut self) {
        self.displayed = Arc::new(self.store.filtered(self.selected_type.as_deref()));
    }

    fn issue_catalog_fetch(&mut self, kind: CatalogFetchKind) -> Effect {
        let ticket = self.next_ticket();
        self.latest_catalog = Some(ticket);
        self.in_flight += 1;
        self.error_message = None;
        Effect::FetchCatalog { ticket, kind }
    }

    fn issue_search(&mut self, text: String) -> Effect {
        let ticket = self.next_ticket();
        self.latest_search = Some(ticket);
        self.in_flight += 1;
        self.error_message = None;
        let query =
            SearchQuery::new(text, self.selected_type.clone()).with_limit(self.search_limit);
        Effect::Search { ticket, query }
    }

    fn next_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        self.next_ticket
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
#[path = "tests/view_state_tests.rs"]
mod tests;
