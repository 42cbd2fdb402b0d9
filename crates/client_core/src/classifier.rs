//! Content classification.
//!
//! Catalog records carry no type tag. The kind of a record is inferred from
//! which identifier field it carries, probed in a fixed order. Episodes also
//! carry the `podcast_id` of their parent show, so the podcast probe must run
//! after the episode probe. Do not reorder [`DISCRIMINATOR_PROBES`].

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    domain::UNKNOWN_ITEM_NAME,
    lenient,
    protocol::{ContentRecord, UnknownRecord},
};
use tracing::debug;

/// One step of the probe: when `field` is present, decode with `decode`.
pub struct DiscriminatorProbe {
    pub field: &'static str,
    decode: fn(&Value) -> Option<ContentRecord>,
}

pub const DISCRIMINATOR_PROBES: [DiscriminatorProbe; 4] = [
    DiscriminatorProbe {
        field: "episode_id",
        decode: decode_episode,
    },
    DiscriminatorProbe {
        field: "audiobook_id",
        decode: decode_audiobook,
    },
    DiscriminatorProbe {
        field: "article_id",
        decode: decode_audio_article,
    },
    DiscriminatorProbe {
        field: "podcast_id",
        decode: decode_podcast,
    },
];

fn decode_episode(record: &Value) -> Option<ContentRecord> {
    decode_as(record).map(ContentRecord::Episode)
}

fn decode_audiobook(record: &Value) -> Option<ContentRecord> {
    decode_as(record).map(ContentRecord::Audiobook)
}

fn decode_audio_article(record: &Value) -> Option<ContentRecord> {
    decode_as(record).map(ContentRecord::AudioArticle)
}

fn decode_podcast(record: &Value) -> Option<ContentRecord> {
    decode_as(record).map(ContentRecord::Podcast)
}

fn decode_as<T: DeserializeOwned>(record: &Value) -> Option<T> {
    match serde_json::from_value(record.clone()) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            debug!(error = %err, "record matched a probe but failed to decode");
            None
        }
    }
}

/// Classifies one raw record. Never fails: unmatched shapes become
/// [`ContentRecord::Unknown`] carrying the verbatim payload.
pub fn classify(record: &Value) -> ContentRecord {
    for probe in &DISCRIMINATOR_PROBES {
        if record.get(probe.field).is_some() {
            if let Some(classified) = (probe.decode)(record) {
                return classified;
            }
            // A matched probe that cannot decode falls through to the
            // unknown variant rather than to a lower-priority probe.
            break;
        }
    }
    ContentRecord::Unknown(unknown_record(record))
}

fn unknown_record(record: &Value) -> UnknownRecord {
    let text = |key: &str| record.get(key).and_then(lenient::value_as_text);
    UnknownRecord {
        name: text("name").unwrap_or_else(|| UNKNOWN_ITEM_NAME.to_string()),
        description: text("description"),
        avatar_url: text("avatar_url"),
        score: text("score").unwrap_or_default(),
        raw_payload: record.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
