pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, BrandSummary, CategorySummary, NewArticle};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleId, ArticleSortKey};
