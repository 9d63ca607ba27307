use crate::domain::constants::{SORT_FIELD_BRAND_NAME, SORT_FIELD_CATEGORY_NAME, SORT_FIELD_NAME};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::invalid("article id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

/// Orderings accepted for article listings. `BrandName` and `CategoryName` are
/// derived keys resolved by the repository (the brand's name and the name of
/// the article's first category).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleSortKey {
    Name,
    BrandName,
    CategoryName,
}

impl SortKey for ArticleSortKey {
    const ALLOWED: &'static [(&'static str, Self)] = &[
        (SORT_FIELD_NAME, Self::Name),
        (SORT_FIELD_BRAND_NAME, Self::BrandName),
        (SORT_FIELD_CATEGORY_NAME, Self::CategoryName),
    ];
}
