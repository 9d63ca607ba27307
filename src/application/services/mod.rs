// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::use_cases::{
        articles::ArticleUseCase, brands::BrandUseCase, categories::CategoryUseCase,
    },
    domain::{
        article::ArticleRepository, brand::BrandRepository, category::CategoryRepository,
    },
};

pub struct ApplicationServices {
    pub categories: Arc<CategoryUseCase>,
    pub brands: Arc<BrandUseCase>,
    pub articles: Arc<ArticleUseCase>,
}

impl ApplicationServices {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        brand_repo: Arc<dyn BrandRepository>,
        article_repo: Arc<dyn ArticleRepository>,
    ) -> Self {
        let categories = Arc::new(CategoryUseCase::new(Arc::clone(&category_repo)));
        let brands = Arc::new(BrandUseCase::new(Arc::clone(&brand_repo)));
        let articles = Arc::new(ArticleUseCase::new(
            Arc::clone(&article_repo),
            Arc::clone(&brand_repo),
            Arc::clone(&category_repo),
        ));

        Self {
            categories,
            brands,
            articles,
        }
    }
}
