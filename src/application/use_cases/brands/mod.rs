// src/application/use_cases/brands/mod.rs
mod create;
mod list;
mod service;

pub use create::CreateBrandCommand;
pub use service::BrandUseCase;
