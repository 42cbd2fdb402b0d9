use std::{sync::Arc, time::Duration};

use shared::protocol::SearchQuery;
use tokio::{
    sync::{
        mpsc::{self, UnboundedReceiver, UnboundedSender},
        watch,
    },
    task::JoinHandle,
};
use tracing::{debug, warn};

use crate::{
    debounce::debounce_distinct,
    settings::ClientSettings,
    source::CatalogSource,
    view_state::{CatalogFetchKind, CoordinatorState, Effect, Event, Ticket, ViewState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorOptions {
    pub debounce_window: Duration,
    pub search_limit: Option<u32>,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self::from(&ClientSettings::default())
    }
}

impl From<&ClientSettings> for CoordinatorOptions {
    fn from(settings: &ClientSettings) -> Self {
        Self {
            debounce_window: settings.debounce_window(),
            search_limit: settings.search_limit,
        }
    }
}

#[derive(Debug)]
enum Command {
    SelectType(Option<String>),
    ChangeSearchText(String),
    Refresh,
    Shutdown,
}

/// Presentation-side handle to a running coordinator.
///
/// Commands are queued to the owner task; state is observed through
/// [`subscribe`](Self::subscribe).
pub struct CoordinatorHandle {
    commands: UnboundedSender<Command>,
    state: watch::Receiver<ViewState>,
    task: JoinHandle<()>,
}

impl CoordinatorHandle {
    pub fn select_type(&self, content_type: Option<String>) {
        self.send(Command::SelectType(content_type));
    }

    pub fn change_search_text(&self, text: impl Into<String>) {
        self.send(Command::ChangeSearchText(text.into()));
    }

    pub fn refresh(&self) {
        self.send(Command::Refresh);
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.clone()
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub async fn shutdown(self) {
        self.send(Command::Shutdown);
        if let Err(err) = self.task.await {
            warn!(error = %err, "coordinator task ended abnormally");
        }
    }

    fn send(&self, command: Command) {
        if let Err(err) = self.commands.send(command) {
            warn!(command = ?err.0, "coordinator stopped; dropping command");
        }
    }
}

/// Starts a coordinator on the current tokio runtime and issues the initial
/// catalog fetch.
pub fn spawn_coordinator(
    source: Arc<dyn CatalogSource>,
    options: CoordinatorOptions,
) -> CoordinatorHandle {
    let (commands, command_rx) = mpsc::unbounded_channel();
    let (publisher, state) = watch::channel(ViewState::default());
    let (results, result_rx) = mpsc::unbounded_channel();
    let (triggers, trigger_rx) = mpsc::unbounded_channel();
    let (settled_rx, debounce_task) = debounce_distinct(trigger_rx, options.debounce_window);

    let owner = Owner {
        state: CoordinatorState::new(options.search_limit),
        source,
        publisher,
        results,
        triggers,
    };
    let task = tokio::spawn(owner.run(command_rx, result_rx, settled_rx, debounce_task));

    CoordinatorHandle {
        commands,
        state,
        task,
    }
}

struct Owner {
    state: CoordinatorState,
    source: Arc<dyn CatalogSource>,
    publisher: watch::Sender<ViewState>,
    results: UnboundedSender<Event>,
    triggers: UnboundedSender<String>,
}

impl Owner {
    async fn run(
        mut self,
        mut commands: UnboundedReceiver<Command>,
        mut results: UnboundedReceiver<Event>,
        mut settled: UnboundedReceiver<String>,
        debounce_task: JoinHandle<()>,
    ) {
        self.dispatch(Event::Start);
        loop {
            let event = tokio::select! {
                command = commands.recv() => match command {
                    Some(Command::SelectType(content_type)) => Event::SelectType(content_type),
                    Some(Command::ChangeSearchText(text)) => Event::ChangeSearchText(text),
                    Some(Command::Refresh) => Event::Refresh,
                    Some(Command::Shutdown) | None => break,
                },
                Some(event) = results.recv() => event,
                Some(text) = settled.recv() => {
                    debug!(text = %text, "search text settled");
                    Event::SearchSettled(text)
                }
            };
            self.dispatch(event);
        }
        debounce_task.abort();
        debug!("coordinator stopped");
    }

    fn dispatch(&mut self, event: Event) {
        for effect in self.state.reduce(event) {
            self.execute(effect);
        }
        let next = self.state.view();
        self.publisher.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    fn execute(&self, effect: Effect) {
        match effect {
            Effect::FetchCatalog { ticket, kind } => self.spawn_catalog_fetch(ticket, kind),
            Effect::Search { ticket, query } => self.spawn_search(ticket, query),
            Effect::Debounce(text) => {
                if self.triggers.send(text).is_err() {
                    warn!("debounce worker stopped; search text ignored");
                }
            }
        }
    }

    fn spawn_catalog_fetch(&self, ticket: Ticket, kind: CatalogFetchKind) {
        let source = Arc::clone(&self.source);
        let results = self.results.clone();
        tokio::spawn(async move {
            let result = source.fetch_home_sections().await.map_err(|err| {
                let cause = format!("{err:#}");
                warn!(ticket, ?kind, error = %cause, "catalog fetch failed");
                cause
            });
            let _ = results.send(Event::CatalogFetched {
                ticket,
                kind,
                result,
            });
        });
    }

    fn spawn_search(&self, ticket: Ticket, query: SearchQuery) {
        let source = Arc::clone(&self.source);
        let results = self.results.clone();
        tokio::spawn(async move {
            let result = source.search_content(&query).await.map_err(|err| {
                let cause = format!("{err:#}");
                warn!(ticket, error = %cause, "catalog search failed");
                cause
            });
            let _ = results.send(Event::SearchFetched { ticket, result });
        });
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
