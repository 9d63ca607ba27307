pub mod article;
pub mod brand;
pub mod category;
pub mod constants;
pub mod errors;
pub mod pagination;
pub mod validation;
