use std::sync::Arc;

use shared::domain::Section;

/// Last successfully fetched, unfiltered catalog.
///
/// Snapshots are swapped whole; a reader holding an `Arc` from [`current`]
/// keeps seeing the snapshot it took even after a replace.
///
/// [`current`]: CatalogStore::current
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    sections: Arc<Vec<Section>>,
    content_type_labels: Arc<Vec<String>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, sections: Vec<Section>) {
        let labels = distinct_content_types(&sections);
        self.sections = Arc::new(sections);
        self.content_type_labels = Arc::new(labels);
    }

    pub fn current(&self) -> Arc<Vec<Section>> {
        Arc::clone(&self.sections)
    }

    /// Distinct `content_type` values in first-seen order.
    pub fn content_type_labels(&self) -> Arc<Vec<String>> {
        Arc::clone(&self.content_type_labels)
    }

    /// Sections whose content type equals `selected_type`, or all of them
    /// when nothing is selected. Base order is kept.
    pub fn filtered(&self, selected_type: Option<&str>) -> Vec<Section> {
        filter_sections(&self.sections, selected_type)
    }
}

pub fn filter_sections(sections: &[Section], selected_type: Option<&str>) -> Vec<Section> {
    sections
        .iter()
        .filter(|section| selected_type.map_or(true, |t| section.content_type == t))
        .cloned()
        .collect()
}

fn distinct_content_types(sections: &[Section]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for section in sections {
        if !labels.iter().any(|label| *label == section.content_type) {
            labels.push(section.content_type.clone());
        }
    }
    labels
}

#[cfg(test)]
#[path = "tests/catalog_store_tests.rs"]
mod tests;
