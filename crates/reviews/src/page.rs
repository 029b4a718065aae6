//! Offset pagination over an already-ordered review list.

use serde::Serialize;

use learnhub_core::{DomainError, DomainResult};

/// 1-based page request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    /// Validate `page >= 1` and `1 <= limit <= MAX_LIMIT`, applying defaults for
    /// missing values.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> DomainResult<Self> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(Self::DEFAULT_LIMIT);
        if page == 0 {
            return Err(DomainError::invalid_argument("page must be at least 1"));
        }
        if limit == 0 || limit > Self::MAX_LIMIT {
            return Err(DomainError::invalid_argument(format!(
                "limit must be between 1 and {}",
                Self::MAX_LIMIT
            )));
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    fn offset(&self) -> usize {
        (self.page as usize)
            .saturating_sub(1)
            .saturating_mul(self.limit as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// One page of items plus the size of the full result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub total: usize,
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    /// Cut `request`'s window out of `items`. Pages past the end are empty.
    pub fn slice(items: Vec<T>, request: PageRequest) -> Self {
        let total = items.len();
        let items = items
            .into_iter()
            .skip(request.offset())
            .take(request.limit as usize)
            .collect();
        Self {
            total,
            items,
            page: request.page,
            limit: request.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_bounds() {
        assert_eq!(PageRequest::new(None, None).unwrap(), PageRequest::default());
        assert!(PageRequest::new(Some(0), None).is_err());
        assert!(PageRequest::new(None, Some(0)).is_err());
        assert!(PageRequest::new(None, Some(101)).is_err());
        assert_eq!(PageRequest::new(Some(3), Some(100)).unwrap().limit(), 100);
    }

    #[test]
    fn slicing() {
        let items: Vec<u32> = (1..=25).collect();
        let second = Page::slice(items.clone(), PageRequest::new(Some(2), Some(10)).unwrap());
        assert_eq!(second.total, 25);
        assert_eq!(second.items, (11..=20).collect::<Vec<_>>());

        let last = Page::slice(items.clone(), PageRequest::new(Some(3), Some(10)).unwrap());
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);

        let beyond = Page::slice(items, PageRequest::new(Some(9), Some(10)).unwrap());
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 25);
        assert_eq!(beyond.page, 9);
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let request = PageRequest { page: 0, limit: 2 };
        let page = Page::slice(vec![1, 2, 3], request);
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total, 3);
    }
}
