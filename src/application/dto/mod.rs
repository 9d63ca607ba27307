pub mod articles;
pub mod brands;
pub mod categories;
pub mod pagination;

pub use articles::{ArticleDto, BrandSummaryDto, CategorySummaryDto};
pub use brands::BrandDto;
pub use categories::CategoryDto;
pub use pagination::PageDto;
