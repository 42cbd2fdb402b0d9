use serde::{Deserialize, Serialize};

/// Placeholder name for records that carry no recognizable identifier and no name.
pub const UNKNOWN_ITEM_NAME: &str = "Unknown Item";

/// Label of the category chip that clears the content-type selection.
pub const ALL_CONTENT_TYPES_LABEL: &str = "For you";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Podcast,
    Episode,
    Audiobook,
    AudioArticle,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Podcast {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub episode_count: i64,
    pub duration: i64,
    pub language: String,
    pub priority: String,
    pub popularity_score: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub podcast_name: String,
    pub author_name: String,
    pub duration: i64,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audiobook {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub author_name: String,
    pub duration: i64,
    pub language: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioArticle {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub author_name: String,
    pub duration: i64,
    pub score: String,
}

/// Content whose shape matched none of the known identifiers.
///
/// `raw_payload` is the original record serialized verbatim so that newer
/// payload shapes survive the round trip through this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownContent {
    pub name: String,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub score: String,
    pub raw_payload: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    Podcast(Podcast),
    Episode(Episode),
    Audiobook(Audiobook),
    AudioArticle(AudioArticle),
    Unknown(UnknownContent),
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Podcast(_) => ContentKind::Podcast,
            Content::Episode(_) => ContentKind::Episode,
            Content::Audiobook(_) => ContentKind::Audiobook,
            Content::AudioArticle(_) => ContentKind::AudioArticle,
            Content::Unknown(_) => ContentKind::Unknown,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Content::Podcast(item) => &item.name,
            Content::Episode(item) => &item.name,
            Content::Audiobook(item) => &item.name,
            Content::AudioArticle(item) => &item.name,
            Content::Unknown(item) => &item.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Content::Podcast(item) => item.description.as_deref(),
            Content::Episode(item) => item.description.as_deref(),
            Content::Audiobook(item) => item.description.as_deref(),
            Content::AudioArticle(item) => item.description.as_deref(),
            Content::Unknown(item) => item.description.as_deref(),
        }
    }

    pub fn avatar_url(&self) -> Option<&str> {
        match self {
            Content::Podcast(item) => item.avatar_url.as_deref(),
            Content::Episode(item) => item.avatar_url.as_deref(),
            Content::Audiobook(item) => item.avatar_url.as_deref(),
            Content::AudioArticle(item) => item.avatar_url.as_deref(),
            Content::Unknown(item) => item.avatar_url.as_deref(),
        }
    }

    pub fn score(&self) -> &str {
        match self {
            Content::Podcast(item) => &item.score,
            Content::Episode(item) => &item.score,
            Content::Audiobook(item) => &item.score,
            Content::AudioArticle(item) => &item.score,
            Content::Unknown(item) => &item.score,
        }
    }
}

/// Presentation layout declared by a section. Only renderers interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionLayout {
    Queue,
    Square,
    BigSquare,
    TwoLinesGrid,
    Other(String),
}

impl SectionLayout {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "queue" => SectionLayout::Queue,
            "square" => SectionLayout::Square,
            "big_square" | "big square" => SectionLayout::BigSquare,
            "2_lines_grid" => SectionLayout::TwoLinesGrid,
            other => SectionLayout::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    /// Raw layout tag as sent upstream.
    pub layout: String,
    pub content_type: String,
    pub order: String,
    pub content: Vec<Content>,
}

impl Section {
    pub fn layout_kind(&self) -> SectionLayout {
        SectionLayout::from_tag(&self.layout)
    }
}

/// Human label for a content-type tag: `"audio_book"` becomes `"Audio Book"`.
pub fn content_type_display_label(content_type: &str) -> String {
    content_type
        .replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
