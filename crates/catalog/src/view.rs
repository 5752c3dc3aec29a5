use serde::{Deserialize, Serialize};

use crate::entry::CatalogEntry;

/// Category restriction for the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// No restriction.
    All,
    /// Only entries whose category equals this value.
    Category(String),
}

impl CategoryFilter {
    /// Synthetic label used as the head of [`CatalogView::available_categories`].
    pub const ALL_LABEL: &'static str = "all";

    /// Interpret a selector value; the "all" label (any case) means no
    /// restriction.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(Self::ALL_LABEL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => wanted == category,
        }
    }
}

/// Transient filter criteria. Recomputed into a visible list on every
/// change; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
        }
    }
}

/// View-state of the product grid: the backing entry list plus the current
/// filter criteria.
///
/// The visible list is a pure function of (source, query, category) — it is
/// derived on demand and never cached across source mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    source: Vec<CatalogEntry>,
    filter: FilterState,
}

impl CatalogView {
    pub fn new(source: Vec<CatalogEntry>) -> Self {
        Self {
            source,
            filter: FilterState::default(),
        }
    }

    pub fn source(&self) -> &[CatalogEntry] {
        &self.source
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Replace the free-text filter.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    /// Replace the category restriction.
    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    /// Swap the backing list (e.g. after the product source delivers a fresh
    /// fetch). The derived list reflects the new source immediately.
    pub fn replace_source(&mut self, source: Vec<CatalogEntry>) {
        self.source = source;
    }

    /// The entries satisfying both the text and category predicates, in
    /// source order (stable filter, no re-sorting). An empty result is a
    /// valid state, not an error.
    ///
    /// Text matching is a case-insensitive substring match against name OR
    /// SKU; an empty query matches everything.
    pub fn visible_entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        let needle = self.filter.query.to_lowercase();
        self.source.iter().filter(move |entry| {
            self.filter.category.matches(&entry.category) && matches_text(entry, &needle)
        })
    }

    /// Distinct category values present in the source, in first-seen order,
    /// headed by the synthetic "all" entry.
    pub fn available_categories(&self) -> Vec<String> {
        let mut categories = vec![CategoryFilter::ALL_LABEL.to_string()];
        for entry in &self.source {
            if !categories[1..].iter().any(|c| c == &entry.category) {
                categories.push(entry.category.clone());
            }
        }
        categories
    }
}

fn matches_text(entry: &CatalogEntry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    entry.name.to_lowercase().contains(needle) || entry.sku.to_lowercase().contains(needle)
}
