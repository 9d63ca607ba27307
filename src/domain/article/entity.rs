// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::brand::BrandId;
use crate::domain::category::CategoryId;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandSummary {
    pub id: BrandId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
    pub brand: BrandSummary,
    /// Kept in the order the categories were supplied at creation.
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
    pub brand_id: BrandId,
    pub category_ids: Vec<CategoryId>,
}
