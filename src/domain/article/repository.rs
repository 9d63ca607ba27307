use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleSortKey;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Pagination};
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn exists_by_name(&self, name: &str) -> DomainResult<bool>;
    async fn list_page(
        &self,
        request: PageRequest<ArticleSortKey>,
    ) -> DomainResult<Pagination<Article>>;
}
