// src/application/use_cases/brands/service.rs
use std::sync::Arc;

use crate::domain::brand::BrandRepository;

pub struct BrandUseCase {
    pub(super) repo: Arc<dyn BrandRepository>,
}

impl BrandUseCase {
    pub fn new(repo: Arc<dyn BrandRepository>) -> Self {
        Self { repo }
    }
}
