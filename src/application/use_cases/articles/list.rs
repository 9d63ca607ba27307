use super::ArticleUseCase;
use crate::{
    application::{error::ApplicationResult, use_cases::ListQuery},
    domain::{
        article::{Article, ArticleSortKey},
        pagination::{Pagination, SortKey},
    },
};

impl ArticleUseCase {
    pub async fn list_articles(&self, query: ListQuery) -> ApplicationResult<Pagination<Article>> {
        let request = query.page_request::<ArticleSortKey>("list_articles")?;
        tracing::debug!(sort_by = request.sort_by.field_name(), "listing articles");
        Ok(self.article_repo.list_page(request).await?)
    }
}
