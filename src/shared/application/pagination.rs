/// Pagination support for queries
///
/// Standard pagination model used across all bounded contexts
use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 3,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> AppResult<Self> {
        Validator::validate_pagination(page, page_size)?;
        Ok(Self { page, page_size })
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size as usize
    }

    pub fn limit(&self) -> usize {
        self.page_size as usize
    }

    /// Select this page's window from an already ordered slice
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.limit()).min(items.len());
        &items[start..end]
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        let total_pages = ((total_count as f64) / (params.page_size as f64)).ceil() as u32;

        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
