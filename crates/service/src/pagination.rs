//! Pagination utilities for service layer
//!
//! `Pagination` is a compound parameter: a page and a page size are supplied
//! together or not at all.

use crate::errors::ServiceError;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: i64,
    /// items per page
    pub page_size: i64,
}

impl Pagination {
    pub fn new(page: i64, page_size: i64) -> Self { Self { page, page_size } }

    /// Build from independently optional query values.
    ///
    /// Both absent means "no pagination"; only one present is rejected.
    pub fn from_parts(page: Option<i64>, page_size: Option<i64>) -> Result<Option<Self>, ServiceError> {
        match (page, page_size) {
            (Some(page), Some(page_size)) => Ok(Some(Self { page, page_size })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(ServiceError::Validation("page requires pageSize".into())),
            (None, Some(_)) => Err(ServiceError::Validation("pageSize requires page".into())),
        }
    }

    /// `(offset, limit)` of the window, or `None` when it is empty by
    /// definition (non-positive page or page size).
    pub fn window(self) -> Option<(u64, u64)> {
        if self.page <= 0 || self.page_size <= 0 {
            return None;
        }
        let limit = self.page_size as u64;
        let offset = ((self.page - 1) as u64).saturating_mul(limit);
        Some((offset, limit))
    }

    /// Apply the window to an already materialized, ordered sequence.
    pub fn apply<T>(self, items: Vec<T>) -> Vec<T> {
        match self.window() {
            Some((offset, limit)) => items
                .into_iter()
                .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .collect(),
            None => Vec::new(),
        }
    }
}
