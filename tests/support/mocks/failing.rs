// tests/support/mocks/failing.rs
use async_trait::async_trait;
use stock_catalog::domain::category::{
    Category, CategoryId, CategoryRepository, CategorySortKey, NewCategory,
};
use stock_catalog::domain::errors::{DomainError, DomainResult};
use stock_catalog::domain::pagination::{PageRequest, Pagination};

/// Category store whose every call fails as if the database were down.
pub struct FailingCategoryRepo;

fn unavailable() -> DomainError {
    DomainError::Persistence("connection refused".into())
}

#[async_trait]
impl CategoryRepository for FailingCategoryRepo {
    async fn insert(&self, _category: NewCategory) -> DomainResult<Category> {
        Err(unavailable())
    }

    async fn exists_by_name(&self, _name: &str) -> DomainResult<bool> {
        Err(unavailable())
    }

    async fn exists_by_id(&self, _id: CategoryId) -> DomainResult<bool> {
        Err(unavailable())
    }

    async fn list_page(
        &self,
        _request: PageRequest<CategorySortKey>,
    ) -> DomainResult<Pagination<Category>> {
        Err(unavailable())
    }
}
