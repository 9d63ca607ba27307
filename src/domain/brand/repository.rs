use crate::domain::brand::entity::{Brand, NewBrand};
use crate::domain::brand::value_objects::{BrandId, BrandSortKey};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Pagination};
use async_trait::async_trait;

#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn insert(&self, brand: NewBrand) -> DomainResult<Brand>;
    async fn exists_by_name(&self, name: &str) -> DomainResult<bool>;
    async fn exists_by_id(&self, id: BrandId) -> DomainResult<bool>;
    async fn list_page(
        &self,
        request: PageRequest<BrandSortKey>,
    ) -> DomainResult<Pagination<Brand>>;
}
