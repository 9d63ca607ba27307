// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_brand;
mod postgres_category;

pub(crate) use error::map_sqlx;
pub use postgres_article::PostgresArticleRepository;
pub use postgres_brand::PostgresBrandRepository;
pub use postgres_category::PostgresCategoryRepository;
