/// Offset/limit window derived from a 1-based page number and a fixed page size.
///
/// Page numbers below 1 (or no page at all) select the first window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: i64,
    limit: i64,
}

impl PageRequest {
    pub fn from_page(page: Option<i64>, page_size: u32) -> Self {
        let limit = i64::from(page_size.max(1));
        let offset = match page {
            Some(page) if page > 0 => (page - 1).saturating_mul(limit),
            _ => 0,
        };
        Self { offset, limit }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}
