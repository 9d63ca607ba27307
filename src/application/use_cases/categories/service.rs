// src/application/use_cases/categories/service.rs
use std::sync::Arc;

use crate::domain::category::CategoryRepository;

pub struct CategoryUseCase {
    pub(super) repo: Arc<dyn CategoryRepository>,
}

impl CategoryUseCase {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }
}
