pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Brand, NewBrand};
pub use repository::BrandRepository;
pub use value_objects::{BrandId, BrandSortKey};
