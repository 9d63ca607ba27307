pub mod dto;
pub mod error;
pub mod services;
pub mod use_cases;

pub use error::ApplicationResult;
