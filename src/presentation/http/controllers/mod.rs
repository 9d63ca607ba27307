// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod brands;
pub mod categories;
pub mod params;
