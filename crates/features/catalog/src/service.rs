use crate::format::{
    NO_MATCHING_PARTS, SEARCH_NEEDS_INPUT, SELECTION_NEEDS_INPUT, format_parts, format_total,
};
use crate::source::PartSource;
use rig_domain::constants::ALL_CATEGORIES;
use rig_domain::part::Part;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Result of a search, before it is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Neither a query nor a category was given.
    MissingInput,
    /// Every part that matched, in catalog order. May be empty.
    Found(Vec<Part>),
}

impl SearchOutcome {
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        match self {
            Self::MissingInput => &[],
            Self::Found(parts) => parts,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => f.write_str(SEARCH_NEEDS_INPUT),
            Self::Found(parts) => f.write_str(&format_parts(parts)),
        }
    }
}

/// Result of a price total, before it is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum TotalOutcome {
    /// The selection held no names.
    MissingInput,
    /// None of the names matched a catalog part.
    NoMatch,
    /// Matched parts, in catalog order, with the sum of their prices.
    Selected { parts: Vec<Part>, total: f64 },
}

impl fmt::Display for TotalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => f.write_str(SELECTION_NEEDS_INPUT),
            Self::NoMatch => f.write_str(NO_MATCHING_PARTS),
            Self::Selected { parts, .. } => f.write_str(&format_total(parts)),
        }
    }
}

/// Search and totals over a [`PartSource`].
///
/// Holds no catalog state of its own: every call fetches afresh.
#[derive(Debug, Clone)]
pub struct CatalogService {
    source: Arc<dyn PartSource>,
}

impl CatalogService {
    #[must_use]
    pub fn new(source: impl PartSource + 'static) -> Self {
        Self { source: Arc::new(source) }
    }

    #[must_use]
    pub const fn from_shared(source: Arc<dyn PartSource>) -> Self {
        Self { source }
    }

    /// Fetches the parts of `category` (`"All"` or empty meaning every category)
    /// and keeps those whose name or description contains `query`, ignoring case.
    pub async fn search_parts(&self, query: &str, category: &str) -> SearchOutcome {
        if query.is_empty() && category.is_empty() {
            return SearchOutcome::MissingInput;
        }

        let parts = self.source.fetch(category_filter(category)).await;
        let matched = filter_parts(parts, query);
        debug!(query, category, matched = matched.len(), "Search finished");

        SearchOutcome::Found(matched)
    }

    /// [`Self::search_parts`] rendered as Markdown text.
    pub async fn search(&self, query: &str, category: &str) -> String {
        self.search_parts(query, category).await.to_string()
    }

    /// Sums the prices of the parts named in a comma-separated `selection`.
    ///
    /// Names are trimmed and matched exactly against the whole catalog.
    pub async fn total_parts(&self, selection: &str) -> TotalOutcome {
        let names = parse_selection(selection);
        if names.is_empty() {
            return TotalOutcome::MissingInput;
        }

        let catalog = self.source.fetch(None).await;
        let parts = select_parts(catalog, &names);
        if parts.is_empty() {
            return TotalOutcome::NoMatch;
        }

        let total = parts.iter().map(|p| p.price).sum();
        debug!(requested = names.len(), matched = parts.len(), total, "Total computed");

        TotalOutcome::Selected { parts, total }
    }

    /// [`Self::total_parts`] rendered as Markdown text.
    pub async fn total(&self, selection: &str) -> String {
        self.total_parts(selection).await.to_string()
    }

    /// Every category label the remote API understands, `All` first.
    #[must_use]
    pub fn categories() -> Vec<&'static str> {
        rig_domain::category::Category::selector_options()
    }
}

/// Maps the UI category selector to a source filter.
#[must_use]
pub fn category_filter(category: &str) -> Option<&str> {
    (!category.is_empty() && category != ALL_CATEGORIES).then_some(category)
}

/// Keeps parts whose name or description contains `query`, case-insensitively.
///
/// An empty query keeps everything.
#[must_use]
pub fn filter_parts(parts: Vec<Part>, query: &str) -> Vec<Part> {
    if query.is_empty() {
        return parts;
    }

    let needle = query.to_lowercase();
    parts
        .into_iter()
        .filter(|part| {
            part.name.to_lowercase().contains(&needle)
                || part.description().is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Splits a comma-separated selection into trimmed, non-empty names.
#[must_use]
pub fn parse_selection(selection: &str) -> Vec<&str> {
    selection.split(',').map(str::trim).filter(|name| !name.is_empty()).collect()
}

/// Parts whose name equals one of `names`, in catalog order.
///
/// A name listed twice still selects its part once; two catalog parts sharing a
/// name are both selected.
#[must_use]
pub fn select_parts(catalog: Vec<Part>, names: &[&str]) -> Vec<Part> {
    catalog.into_iter().filter(|part| names.contains(&part.name.as_str())).collect()
}
