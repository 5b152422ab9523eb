use crate::data::models::PageParams;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;
pub const MAX_PER_PAGE: i64 = 100;

/// Effective paging window after defaults and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    pub fn from_params(params: &PageParams) -> Self {
        let parse = |raw: &Option<String>, default: i64| {
            raw.as_deref()
                .and_then(|value| value.trim().parse::<i64>().ok())
                .unwrap_or(default)
        };

        Pagination {
            page: parse(&params.page, DEFAULT_PAGE).max(1),
            per_page: parse(&params.per_page, DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.per_page - 1) / self.per_page
    }
}
