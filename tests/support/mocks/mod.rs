// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod catalog_repos;
pub mod failing;

pub use catalog_repos::{
    InMemoryArticleRepo, InMemoryBrandRepo, InMemoryCategoryRepo, InMemoryStore,
};
pub use failing::FailingCategoryRepo;
