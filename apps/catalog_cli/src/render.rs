use std::fmt::Write as _;

use client_core::ViewState;
use shared::domain::{
    content_type_display_label, Content, Section, SectionLayout, ALL_CONTENT_TYPES_LABEL,
};

pub const LOADING: &str = "Loading…";
pub const NO_CONTENT: &str = "No content available";

/// Renders one coordinator snapshot as plain text.
pub fn render_view(view: &ViewState) -> String {
    if view.is_loading && view.displayed_sections.is_empty() {
        return LOADING.to_string();
    }
    if let Some(message) = &view.error_message {
        return message.clone();
    }
    if view.displayed_sections.is_empty() {
        return if view.search_text.trim().is_empty() {
            NO_CONTENT.to_string()
        } else {
            format!("No results found for \"{}\"", view.search_text)
        };
    }

    let mut out = render_chips(&view.content_type_labels, view.selected_type.as_deref());
    if view.is_loading {
        out.push_str("  (updating)");
    }
    out.push('\n');
    out.push_str(&render_sections(&view.displayed_sections));
    out
}

/// Category chips; the selected one is bracketed.
pub fn render_chips(labels: &[String], selected: Option<&str>) -> String {
    let mut chips = vec![chip(ALL_CONTENT_TYPES_LABEL, selected.is_none())];
    chips.extend(labels.iter().map(|label| {
        chip(
            &content_type_display_label(label),
            selected == Some(label.as_str()),
        )
    }));
    chips.join(" ")
}

fn chip(label: &str, selected: bool) -> String {
    if selected {
        format!("[{label}]")
    } else {
        format!(" {label} ")
    }
}

pub fn render_sections(sections: &[Section]) -> String {
    if sections.is_empty() {
        return format!("{NO_CONTENT}\n");
    }
    let mut out = String::new();
    for section in sections {
        let _ = writeln!(out, "\n== {} ({}) ==", section.name, layout_label(section));
        for item in &section.content {
            let _ = writeln!(out, "  - {}", item_line(item));
        }
    }
    out
}

fn layout_label(section: &Section) -> String {
    match section.layout_kind() {
        SectionLayout::Queue => "queue".to_string(),
        SectionLayout::Square => "square".to_string(),
        SectionLayout::BigSquare => "big square".to_string(),
        SectionLayout::TwoLinesGrid => "grid".to_string(),
        SectionLayout::Other(tag) if tag.is_empty() => "list".to_string(),
        SectionLayout::Other(tag) => tag,
    }
}

pub fn item_line(item: &Content) -> String {
    match item {
        Content::Podcast(podcast) => {
            format!("{} · {} episodes", podcast.name, podcast.episode_count)
        }
        Content::Episode(episode) => format!("{} · {}", episode.name, episode.podcast_name),
        Content::Audiobook(book) => format!("{} · {}", book.name, book.author_name),
        Content::AudioArticle(article) => format!("{} · {}", article.name, article.author_name),
        Content::Unknown(unknown) => format!("{} · Unknown content type", unknown.name),
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
