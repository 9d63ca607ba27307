// src/domain/brand/entity.rs
use crate::domain::brand::value_objects::BrandId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBrand {
    pub name: String,
    pub description: String,
}
