// src/domain/category/value_objects.rs
use crate::domain::constants::SORT_FIELD_NAME;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::SortKey;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::invalid("category id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySortKey {
    Name,
}

impl SortKey for CategorySortKey {
    const ALLOWED: &'static [(&'static str, Self)] = &[(SORT_FIELD_NAME, Self::Name)];
}
