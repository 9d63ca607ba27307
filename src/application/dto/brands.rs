use crate::domain::brand::Brand;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BrandDto {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<Brand> for BrandDto {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id.into(),
            name: brand.name,
            description: brand.description,
        }
    }
}
