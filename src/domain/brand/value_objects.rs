// src/domain/brand/value_objects.rs
use crate::domain::constants::SORT_FIELD_NAME;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::SortKey;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrandId(pub i64);

impl BrandId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::invalid("brand id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<BrandId> for i64 {
    fn from(value: BrandId) -> Self {
        value.0
    }
}

impl fmt::Display for BrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandSortKey {
    Name,
}

impl SortKey for BrandSortKey {
    const ALLOWED: &'static [(&'static str, Self)] = &[(SORT_FIELD_NAME, Self::Name)];
}
