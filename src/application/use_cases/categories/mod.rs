// src/application/use_cases/categories/mod.rs
mod create;
mod list;
mod service;

pub use create::CreateCategoryCommand;
pub use service::CategoryUseCase;
