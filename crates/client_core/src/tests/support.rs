use std::{
    collections::{HashMap, VecDeque},
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::{
    domain::{Content, Episode, Podcast, Section},
    protocol::SearchQuery,
};
use tokio::{
    sync::{oneshot, watch, Mutex},
    time::Instant,
};

use crate::{source::CatalogSource, view_state::ViewState};

pub(crate) fn podcast(id: &str, name: &str) -> Content {
    Content::Podcast(Podcast {
        id: id.to_string(),
        name: name.to_string(),
        description: Some("Desc".to_string()),
        avatar_url: Some("url1".to_string()),
        episode_count: 10,
        duration: 60000,
        language: "en".to_string(),
        priority: "1".to_string(),
        popularity_score: "5".to_string(),
        score: "100.0".to_string(),
    })
}

pub(crate) fn episode(id: &str, name: &str) -> Content {
    Content::Episode(Episode {
        id: id.to_string(),
        name: name.to_string(),
        description: Some("Ep Desc".to_string()),
        avatar_url: Some("epurl1".to_string()),
        podcast_name: "Pod 1".to_string(),
        author_name: "Author 1".to_string(),
        duration: 1200,
        score: "50.0".to_string(),
    })
}

pub(crate) fn section(name: &str, content_type: &str, content: Vec<Content>) -> Section {
    Section {
        name: name.to_string(),
        layout: "square".to_string(),
        content_type: content_type.to_string(),
        order: "1".to_string(),
        content,
    }
}

pub(crate) fn home_sections() -> Vec<Section> {
    vec![
        section("Top Podcasts", "podcast", vec![podcast("1", "Podcast 1")]),
        section("Trending Episodes", "episode", vec![episode("e1", "Episode 1")]),
    ]
}

pub(crate) fn search_result(label: &str) -> Vec<Section> {
    vec![section(
        &format!("Search results for '{label}'"),
        "podcast",
        vec![podcast(label, label)],
    )]
}

#[derive(Default)]
pub(crate) struct ScriptedSource {
    home: Mutex<VecDeque<Result<Vec<Section>, String>>>,
    search: Mutex<HashMap<String, Result<Vec<Section>, String>>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    search_calls: Mutex<Vec<(SearchQuery, Instant)>>,
    home_calls: AtomicUsize,
}

impl ScriptedSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn push_home(&self, result: Result<Vec<Section>, &str>) {
        self.home
            .lock()
            .await
            .push_back(result.map_err(str::to_string));
    }

    pub(crate) async fn set_search(&self, query: &str, result: Result<Vec<Section>, &str>) {
        self.search
            .lock()
            .await
            .insert(query.to_string(), result.map_err(str::to_string));
    }

    /// Holds searches for `query` open until the returned sender fires.
    pub(crate) async fn gate_search(&self, query: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().await.insert(query.to_string(), rx);
        tx
    }

    pub(crate) async fn search_calls(&self) -> Vec<SearchQuery> {
        self.search_calls
            .lock()
            .await
            .iter()
            .map(|(query, _)| query.clone())
            .collect()
    }

    pub(crate) async fn search_call_times(&self) -> Vec<Instant> {
        self.search_calls
            .lock()
            .await
            .iter()
            .map(|(_, at)| *at)
            .collect()
    }

    pub(crate) fn home_calls(&self) -> usize {
        self.home_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for ScriptedSource {
    async fn fetch_home_sections(&self) -> Result<Vec<Section>> {
        self.home_calls.fetch_add(1, Ordering::SeqCst);
        match self.home.lock().await.pop_front() {
            Some(result) => result.map_err(|message| anyhow!(message)),
            None => Err(anyhow!("no scripted home response")),
        }
    }

    async fn search_content(&self, query: &SearchQuery) -> Result<Vec<Section>> {
        let text = query.query.clone().unwrap_or_default();
        self.search_calls
            .lock()
            .await
            .push((query.clone(), Instant::now()));

        let gate = self.gates.lock().await.remove(&text);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        match self.search.lock().await.get(&text) {
            Some(result) => result.clone().map_err(|message| anyhow!(message.clone())),
            None => Ok(Vec::new()),
        }
    }
}

pub(crate) async fn wait_for_state(
    state: &mut watch::Receiver<ViewState>,
    predicate: impl FnMut(&ViewState) -> bool,
) -> ViewState {
    tokio::time::timeout(Duration::from_secs(5), state.wait_for(predicate))
        .await
        .expect("timed out waiting for view state")
        .expect("coordinator stopped")
        .clone()
}
