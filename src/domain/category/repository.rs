use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategorySortKey};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Pagination};
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn exists_by_name(&self, name: &str) -> DomainResult<bool>;
    async fn exists_by_id(&self, id: CategoryId) -> DomainResult<bool>;
    async fn list_page(
        &self,
        request: PageRequest<CategorySortKey>,
    ) -> DomainResult<Pagination<Category>>;
}
