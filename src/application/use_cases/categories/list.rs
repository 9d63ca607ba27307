use super::CategoryUseCase;
use crate::{
    application::{error::ApplicationResult, use_cases::ListQuery},
    domain::{
        category::{Category, CategorySortKey},
        pagination::Pagination,
    },
};

impl CategoryUseCase {
    /// Categories can only be ordered by `name`.
    pub async fn list_categories(
        &self,
        query: ListQuery,
    ) -> ApplicationResult<Pagination<Category>> {
        let request = query.page_request::<CategorySortKey>("list_categories")?;
        Ok(self.repo.list_page(request).await?)
    }
}
