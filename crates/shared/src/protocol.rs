use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;

/// Envelope returned by both the home and the search endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeSectionsResponse {
    #[serde(default)]
    pub sections: Vec<RawSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub next_page: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub total_pages: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSection {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub layout: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub content_type: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub order: String,
    /// Untyped records; classification decides what each one is.
    #[serde(default, deserialize_with = "lenient::records")]
    pub content: Vec<Value>,
}

/// Query string of the search endpoint. Absent parameters are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, content_type: Option<String>) -> Self {
        Self {
            query: Some(query.into()),
            content_type,
            page: None,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_page(mut self, page: Option<u32>) -> Self {
        self.page = page;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodcastRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub podcast_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub episode_count: i64,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub duration: i64,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub priority: String,
    #[serde(rename = "popularityScore", default, deserialize_with = "lenient::text")]
    pub popularity_score: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub score: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub episode_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub podcast_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub author_name: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub duration: i64,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub podcast_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub score: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudiobookRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub audiobook_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub author_name: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub duration: i64,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub score: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioArticleRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub article_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub author_name: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub duration: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownRecord {
    pub name: String,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub score: String,
    pub raw_payload: String,
}

/// A content record after classification, before domain normalization.
#[derive(Debug, Clone)]
pub enum ContentRecord {
    Episode(EpisodeRecord),
    Audiobook(AudiobookRecord),
    AudioArticle(AudioArticleRecord),
    Podcast(PodcastRecord),
    Unknown(UnknownRecord),
}
