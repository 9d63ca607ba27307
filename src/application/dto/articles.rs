use crate::domain::article::{Article, BrandSummary, CategorySummary};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BrandSummaryDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategorySummaryDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Serialized as a decimal string to keep the exact scale.
    #[schema(value_type = String, example = "123.45")]
    pub price: Decimal,
    pub quantity: i32,
    pub brand: BrandSummaryDto,
    pub categories: Vec<CategorySummaryDto>,
}

impl From<BrandSummary> for BrandSummaryDto {
    fn from(brand: BrandSummary) -> Self {
        Self {
            id: brand.id.into(),
            name: brand.name,
        }
    }
}

impl From<CategorySummary> for CategorySummaryDto {
    fn from(category: CategorySummary) -> Self {
        Self {
            id: category.id.into(),
            name: category.name,
        }
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            name: article.name,
            description: article.description,
            price: article.price,
            quantity: article.quantity,
            brand: article.brand.into(),
            categories: article.categories.into_iter().map(Into::into).collect(),
        }
    }
}
