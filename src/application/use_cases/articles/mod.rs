// src/application/use_cases/articles/mod.rs
mod create;
mod list;
mod service;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use service::ArticleUseCase;
