// src/application/use_cases/articles/service.rs
use std::sync::Arc;

use crate::domain::{
    article::ArticleRepository, brand::BrandRepository, category::CategoryRepository,
};

/// Article creation needs the brand and category stores for reference checks.
pub struct ArticleUseCase {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) brand_repo: Arc<dyn BrandRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
}

impl ArticleUseCase {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        brand_repo: Arc<dyn BrandRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            article_repo,
            brand_repo,
            category_repo,
        }
    }
}
