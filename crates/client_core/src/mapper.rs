use shared::{
    domain::{AudioArticle, Audiobook, Content, Episode, Podcast, Section, UnknownContent},
    protocol::{
        AudioArticleRecord, AudiobookRecord, ContentRecord, EpisodeRecord, HomeSectionsResponse,
        PodcastRecord, RawSection, UnknownRecord,
    },
};

use crate::classifier::classify;

/// Podcasts without a language report this value.
pub const PODCAST_LANGUAGE_FALLBACK: &str = "Unknown";
/// Audiobooks without a language report this value. The casing differs from
/// [`PODCAST_LANGUAGE_FALLBACK`] and clients already depend on both.
pub const AUDIOBOOK_LANGUAGE_FALLBACK: &str = "unknown";

pub fn to_domain(record: ContentRecord) -> Content {
    match record {
        ContentRecord::Podcast(record) => Content::Podcast(podcast_to_domain(record)),
        ContentRecord::Episode(record) => Content::Episode(episode_to_domain(record)),
        ContentRecord::Audiobook(record) => Content::Audiobook(audiobook_to_domain(record)),
        ContentRecord::AudioArticle(record) => {
            Content::AudioArticle(audio_article_to_domain(record))
        }
        ContentRecord::Unknown(record) => Content::Unknown(unknown_to_domain(record)),
    }
}

fn podcast_to_domain(record: PodcastRecord) -> Podcast {
    Podcast {
        id: record.podcast_id,
        name: record.name,
        description: record.description,
        avatar_url: record.avatar_url,
        episode_count: record.episode_count,
        duration: record.duration,
        language: record
            .language
            .unwrap_or_else(|| PODCAST_LANGUAGE_FALLBACK.to_string()),
        priority: record.priority,
        popularity_score: record.popularity_score,
        score: record.score,
    }
}

fn episode_to_domain(record: EpisodeRecord) -> Episode {
    Episode {
        id: record.episode_id,
        name: record.name,
        description: record.description,
        avatar_url: record.avatar_url,
        podcast_name: record.podcast_name,
        author_name: record.author_name,
        duration: record.duration,
        score: record.score,
    }
}

fn audiobook_to_domain(record: AudiobookRecord) -> Audiobook {
    Audiobook {
        id: record.audiobook_id,
        name: record.name,
        description: record.description,
        avatar_url: record.avatar_url,
        author_name: record.author_name,
        duration: record.duration,
        language: record
            .language
            .unwrap_or_else(|| AUDIOBOOK_LANGUAGE_FALLBACK.to_string()),
        score: record.score,
    }
}

fn audio_article_to_domain(record: AudioArticleRecord) -> AudioArticle {
    AudioArticle {
        id: record.article_id,
        name: record.name,
        description: record.description,
        avatar_url: record.avatar_url,
        author_name: record.author_name,
        duration: record.duration,
        score: record.score,
    }
}

fn unknown_to_domain(record: UnknownRecord) -> UnknownContent {
    UnknownContent {
        name: record.name,
        description: record.description,
        avatar_url: record.avatar_url,
        score: record.score,
        raw_payload: record.raw_payload,
    }
}

/// Classifies and maps every record of a section, keeping source order.
pub fn section_to_domain(section: RawSection) -> Section {
    Section {
        name: section.name,
        layout: section.layout,
        content_type: section.content_type,
        order: section.order,
        content: section
            .content
            .iter()
            .map(|record| to_domain(classify(record)))
            .collect(),
    }
}

pub fn response_to_domain(response: HomeSectionsResponse) -> Vec<Section> {
    response
        .sections
        .into_iter()
        .map(section_to_domain)
        .collect()
}

#[cfg(test)]
#[path = "tests/mapper_tests.rs"]
mod tests;
