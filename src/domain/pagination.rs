// src/domain/pagination.rs
use crate::domain::constants::{ORDER_ASC, ORDER_DESC};

/// Field a listing may be ordered by. Each entity declares the keys it accepts;
/// field names are matched ignoring ASCII case.
pub trait SortKey: Copy + PartialEq + Send + Sync + 'static {
    const ALLOWED: &'static [(&'static str, Self)];

    fn parse(raw: &str) -> Option<Self> {
        Self::ALLOWED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(raw))
            .map(|(_, key)| *key)
    }

    fn field_name(self) -> &'static str {
        Self::ALLOWED
            .iter()
            .find(|(_, key)| *key == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case(ORDER_ASC) {
            Some(Self::Asc)
        } else if raw.eq_ignore_ascii_case(ORDER_DESC) {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A listing request whose parameters already passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<K> {
    pub page: u64,
    pub size: u64,
    pub sort_by: K,
    pub direction: SortDirection,
}

impl<K> PageRequest<K> {
    /// Row offset, saturated to what a SQL `OFFSET` accepts.
    pub fn offset(&self) -> i64 {
        i64::try_from(self.page.saturating_mul(self.size)).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        i64::try_from(self.size).unwrap_or(i64::MAX)
    }
}

/// One page of results plus paging metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination<T> {
    pub content: Vec<T>,
    pub page_number: u64,
    pub page_size: u64,
    pub total_elements: u64,
}

impl<T> Pagination<T> {
    pub fn new(content: Vec<T>, page_number: u64, page_size: u64, total_elements: u64) -> Self {
        Self {
            content,
            page_number,
            page_size,
            total_elements,
        }
    }

    pub fn for_request<K>(content: Vec<T>, request: &PageRequest<K>, total_elements: u64) -> Self {
        Self::new(content, request.page, request.size, total_elements)
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.page_size)
    }

    pub fn is_first(&self) -> bool {
        self.page_number == 0
    }

    pub fn is_last(&self) -> bool {
        self.page_number.saturating_add(1) >= self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagination<U> {
        Pagination {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }
}
