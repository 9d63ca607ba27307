use super::BrandUseCase;
use crate::{
    application::{error::ApplicationResult, use_cases::ListQuery},
    domain::{
        brand::{Brand, BrandSortKey},
        pagination::Pagination,
    },
};

impl BrandUseCase {
    /// Categories can only be ordered by `name`.
    pub async fn list_brands(
        &self,
        query: ListQuery,
    ) -> ApplicationResult<Pagination<Brand>> {
        let request = query.page_request::<BrandSortKey>("list_brands")?;
        Ok(self.repo.list_page(request).await?)
    }
}
