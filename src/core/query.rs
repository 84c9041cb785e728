//! The list-query engine: search, sort, and pagination
//!
//! Every list view in the back office goes through [`run_query`]. Composition
//! order is fixed: search narrows the candidate set, a stable sort orders it,
//! pagination slices it. `total_count` always reflects the post-search,
//! pre-pagination count, so changing the order would change results.

use crate::core::entity::Listable;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Hard ceiling on page size, shared with [`crate::config::AdminConfig`]
pub const MAX_PER_PAGE: usize = 100;

/// Sort direction for a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Flip the direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A sort key paired with a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Serialized field name (e.g. "totalAmount")
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: &str) -> Self {
        SortSpec {
            key: key.to_string(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: &str) -> Self {
        SortSpec {
            key: key.to_string(),
            direction: SortDirection::Descending,
        }
    }
}

/// Parameters for a single list query
///
/// Invalid ranges never fail: `page` is clamped to at least 1 and `per_page`
/// to `1..=MAX_PER_PAGE`. A page past the end of the collection yields an
/// empty item list together with the true total.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    /// Free-text search term; empty or absent matches everything
    pub search: Option<String>,
    /// Sort key and direction; absent keeps the collection's existing order
    pub sort: Option<SortSpec>,
    /// 1-indexed page number
    pub page: usize,
    /// Items per page
    pub per_page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery {
            search: None,
            sort: None,
            page: 1,
            per_page: 20,
        }
    }
}

impl ListQuery {
    /// Query for a given page with the default page size
    pub fn page(page: usize) -> Self {
        ListQuery {
            page,
            ..Default::default()
        }
    }

    /// Set the search term
    pub fn with_search(mut self, term: &str) -> Self {
        self.search = Some(term.to_string());
        self
    }

    /// Set the sort spec
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Effective page number, at least 1
    pub fn effective_page(&self) -> usize {
        self.page.max(1)
    }

    /// Effective page size, clamped to `1..=MAX_PER_PAGE`
    pub fn effective_per_page(&self) -> usize {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }

    /// The search term, `None` when empty or whitespace
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Pagination metadata attached to every page of results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (1-indexed)
    pub page: usize,
    /// Items per page
    pub per_page: usize,
    /// Total number of pages
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    fn new(page: usize, per_page: usize, total: usize) -> Self {
        let total_pages = if total == 0 { 0 } else { total.div_ceil(per_page) };
        // Saturating: an absurdly large page must yield an empty page,
        // never an arithmetic panic.
        let start = (page - 1).saturating_mul(per_page);

        PaginationMeta {
            page,
            per_page,
            total_pages,
            has_next: start.saturating_add(per_page) < total,
            has_prev: page > 1,
        }
    }
}

/// One page of results plus the post-filter total
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    /// Count after search, before pagination
    pub total_count: usize,
    pub pagination: PaginationMeta,
}

/// Run a list query over a collection snapshot.
///
/// The input order is the store order (newest first); it survives wherever
/// the query leaves items equal. Search matches case-insensitively against
/// any of the entity's indexed fields.
pub fn run_query<T: Listable>(items: Vec<T>, query: &ListQuery) -> PageResponse<T> {
    let mut matched: Vec<T> = match query.search_term() {
        Some(term) => {
            let needle = term.to_lowercase();
            items
                .into_iter()
                .filter(|item| matches_search(item, &needle))
                .collect()
        }
        None => items,
    };

    if let Some(sort) = &query.sort {
        // Vec::sort_by is stable, equal keys keep their store order.
        matched.sort_by(|a, b| compare_by_field(a, b, &sort.key, sort.direction));
    }

    let total_count = matched.len();
    let page = query.effective_page();
    let per_page = query.effective_per_page();

    let items: Vec<T> = matched
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    PageResponse {
        items,
        total_count,
        pagination: PaginationMeta::new(page, per_page, total_count),
    }
}

fn matches_search<T: Listable>(item: &T, needle: &str) -> bool {
    T::indexed_fields().iter().any(|field| {
        item.field_value(field)
            .map(|value| value.to_search_text().to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

fn compare_by_field<T: Listable>(a: &T, b: &T, key: &str, direction: SortDirection) -> Ordering {
    let va = a.field_value(key).unwrap_or(crate::core::FieldValue::Null);
    let vb = b.field_value(key).unwrap_or(crate::core::FieldValue::Null);
    let ordering = va.compare(&vb);
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
