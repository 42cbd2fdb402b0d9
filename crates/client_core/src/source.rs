use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::Section,
    protocol::{HomeSectionsResponse, SearchQuery},
};
use tracing::{debug, info};
use url::Url;

use crate::{error::CatalogError, mapper::response_to_domain, settings::ClientSettings};

const HOME_SECTIONS_PATH: &str = "home_sections";

/// Where catalog sections come from. Implementations return fully classified
/// sections; type resolution never leaks past this seam.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_home_sections(&self) -> Result<Vec<Section>>;
    async fn search_content(&self, query: &SearchQuery) -> Result<Vec<Section>>;
}

pub struct MissingCatalogSource;

#[async_trait]
impl CatalogSource for MissingCatalogSource {
    async fn fetch_home_sections(&self) -> Result<Vec<Section>> {
        Err(anyhow!("catalog source is unavailable"))
    }

    async fn search_content(&self, _query: &SearchQuery) -> Result<Vec<Section>> {
        Err(anyhow!("catalog source is unavailable"))
    }
}

pub struct HttpCatalogSource {
    http: Client,
    home_url: Url,
    search_url: Url,
}

impl HttpCatalogSource {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .context("failed to build catalog http client")?;
        Self::with_client(http, &settings.base_url, &settings.search_url)
    }

    pub fn with_client(http: Client, base_url: &str, search_url: &str) -> Result<Self> {
        let base = parse_url(&with_trailing_slash(base_url))?;
        let home_url = base
            .join(HOME_SECTIONS_PATH)
            .map_err(|source| CatalogError::InvalidUrl {
                url: base_url.to_string(),
                source,
            })?;
        let search_url = parse_url(search_url)?;
        Ok(Self {
            http,
            home_url,
            search_url,
        })
    }

    async fn get_sections(&self, url: &Url, query: Option<&SearchQuery>) -> Result<Vec<Section>> {
        let mut request = self.http.get(url.clone());
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.to_string(),
                source,
            })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.to_string(),
                source,
            })?;
        if !status.is_success() {
            return Err(CatalogError::from_status(url.as_str(), status.as_u16(), &body).into());
        }

        let payload: HomeSectionsResponse =
            serde_json::from_str(&body).map_err(|source| CatalogError::Decode {
                url: url.to_string(),
                source,
            })?;
        if let Some(pagination) = &payload.pagination {
            debug!(
                next_page = pagination.next_page.as_deref().unwrap_or("-"),
                total_pages = pagination.total_pages,
                "catalog page received"
            );
        }
        Ok(response_to_domain(payload))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_home_sections(&self) -> Result<Vec<Section>> {
        let sections = self
            .get_sections(&self.home_url, None)
            .await
            .context("failed to fetch home sections")?;
        info!(sections = sections.len(), "fetched home sections");
        Ok(sections)
    }

    async fn search_content(&self, query: &SearchQuery) -> Result<Vec<Section>> {
        let sections = self
            .get_sections(&self.search_url, Some(query))
            .await
            .context("failed to search catalog")?;
        info!(
            query = query.query.as_deref().unwrap_or_default(),
            content_type = query.content_type.as_deref().unwrap_or("all"),
            sections = sections.len(),
            "catalog search completed"
        );
        Ok(sections)
    }
}

fn parse_url(raw: &str) -> Result<Url, CatalogError> {
    Url::parse(raw.trim()).map_err(|source| CatalogError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

fn with_trailing_slash(raw: &str) -> String {
    let raw = raw.trim();
    if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
