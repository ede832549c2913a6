//! Wire-level types shared by the manage client and the resource controller

use serde::{Deserialize, Serialize};

/// Page size choices offered by the UI; the server accepts any size
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 20, 50];

/// Server-side discriminator selecting behavior on the shared
/// `{Resource}/manage` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrudAction {
    /// Paginated list with optional free-text search
    View,
    /// Same as [`Self::View`], server-filtered to active records
    ViewActive,
    /// Create a record; the request carries no id
    Add,
    /// Update a record by id; the full field set is resent
    Edit,
    /// Hard-delete a record by id
    Delete,
}

impl CrudAction {
    /// Wire representation of the discriminator
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::ViewActive => "VIEWACTIVE",
            Self::Add => "ADD",
            Self::Edit => "EDIT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for CrudAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a resource's fields travel to the backend
///
/// The backend accepts multipart form fields for some resources and URL
/// query parameters for others; multipart is the standard here and the
/// query-string form is kept as a per-resource compatibility shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Fields as multipart form parts
    Multipart,
    /// Fields as URL query parameters
    QueryString,
}

/// Parameters of a list request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number (1-based)
    pub page_no: u32,

    /// Number of items per page
    pub page_size: u32,

    /// Free-text filter; empty means unfiltered
    pub search: String,
}

impl ListQuery {
    /// First page with the given size and no filter
    #[must_use]
    pub const fn first_page(page_size: u32) -> Self {
        Self {
            page_no: 1,
            page_size,
            search: String::new(),
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::first_page(PAGE_SIZE_OPTIONS[0])
    }
}

/// Pagination envelope returned by list actions
///
/// `data` order is server-determined and treated as already correct;
/// missing fields decode to empty/zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    /// Records for the requested page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    /// Total number of records matching the filter
    #[serde(default)]
    pub total_count: u64,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total_count: 0,
        }
    }
}

/// Client-side pagination state and math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    /// Current page (1-based)
    pub page: u32,

    /// Items per page
    pub page_size: u32,

    /// Total number of items reported by the server
    pub total: u64,
}

impl PageView {
    /// Create a page view at page 1 with the given size
    #[must_use]
    pub const fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total: 0,
        }
    }

    /// Total number of pages: `ceil(total / page_size)`
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size as u64)
    }

    /// Whether a page after the current one exists
    #[must_use]
    pub const fn has_next(&self) -> bool {
        (self.page as u64) < self.total_pages()
    }

    /// Whether a page before the current one exists
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// 1-based inclusive range of item positions shown on this page,
    /// or `None` when there are no items
    #[must_use]
    pub const fn range(&self) -> Option<(u64, u64)> {
        if self.total == 0 {
            return None;
        }
        let from = (self.page as u64 - 1) * self.page_size as u64 + 1;
        if from > self.total {
            return None;
        }
        let to_candidate = self.page as u64 * self.page_size as u64;
        let to = if to_candidate < self.total {
            to_candidate
        } else {
            self.total
        };
        Some((from, to))
    }

    /// Continuous row number of the item at `index` on this page
    #[must_use]
    pub const fn row_number(&self, index: usize) -> u64 {
        (self.page as u64 - 1) * self.page_size as u64 + index as u64 + 1
    }

    /// Largest valid page for the current total, at least 1
    #[must_use]
    pub const fn last_page(&self) -> u32 {
        let pages = self.total_pages();
        if pages == 0 { 1 } else { pages as u32 }
    }
}

/// Whether the given size is one of the UI page size choices
#[must_use]
pub fn is_allowed_page_size(size: u32) -> bool {
    PAGE_SIZE_OPTIONS.contains(&size)
}
