// src/domain/constants.rs
//! Read-only messages and limits shared by the catalog rules.

pub const FIELD_NAME_EMPTY: &str = "Field name cannot be null or empty";
pub const FIELD_DESCRIPTION_EMPTY: &str = "Field description cannot be null or empty";

pub const CATEGORY_NAME_MAX: usize = 50;
pub const CATEGORY_DESCRIPTION_MAX: usize = 90;
pub const CATEGORY_NAME_TOO_LONG: &str = "Category name cannot be longer than 50 characters";
pub const CATEGORY_DESCRIPTION_TOO_LONG: &str =
    "Category description cannot be longer than 90 characters";
pub const CATEGORY_EXISTS: &str = "Category already exists";

pub const BRAND_NAME_MAX: usize = 50;
pub const BRAND_DESCRIPTION_MAX: usize = 120;
pub const BRAND_NAME_TOO_LONG: &str = "Brand name cannot be longer than 50 characters";
pub const BRAND_DESCRIPTION_TOO_LONG: &str =
    "Brand description cannot be longer than 120 characters";
pub const BRAND_EXISTS: &str = "Brand already exists";

pub const ARTICLE_EXISTS: &str = "Article already exists";
pub const FIELD_PRICE_MISSING: &str = "Field price cannot be null";
pub const FIELD_PRICE_NOT_POSITIVE: &str = "Field price must be greater than zero";
pub const FIELD_QUANTITY_MISSING: &str = "Field quantity cannot be null";
pub const FIELD_QUANTITY_NEGATIVE: &str = "Field quantity cannot be negative";
pub const FIELD_BRAND_ID_MISSING: &str = "Field brand id cannot be null";

pub const ARTICLE_CATEGORIES_MIN: usize = 1;
pub const ARTICLE_CATEGORIES_MAX: usize = 3;
pub const ARTICLE_CATEGORIES_EMPTY: &str = "Article must have at least one category.";
pub const ARTICLE_CATEGORIES_TOO_MANY: &str = "Article cannot have more than three categories.";
pub const ARTICLE_CATEGORIES_DUPLICATE: &str = "Article contains duplicate categories.";
/// Bodies listing more ids than this are refused before any category lookup.
pub const ARTICLE_CATEGORY_IDS_REQUEST_MAX: usize = 16;
pub const ARTICLE_CATEGORY_IDS_REQUEST_TOO_LARGE: &str =
    "Article request cannot list more than 16 category ids.";

pub fn category_not_found(id: i64) -> String {
    format!("Category with id {id} does not exist")
}

pub fn brand_not_found(id: i64) -> String {
    format!("Brand with id {id} does not exist")
}

pub const PAGE_NUMBER_MISSING: &str = "The page number cannot be null.";
pub const PAGE_NUMBER_NEGATIVE: &str = "The page number must be non-negative.";
pub const PAGE_SIZE_MISSING: &str = "The page size cannot be null.";
pub const PAGE_SIZE_NOT_POSITIVE: &str = "The page size must be greater than zero.";
pub const SORT_FIELD_INVALID: &str = "The sort field is invalid.";
pub const SORT_DIRECTION_INVALID: &str = "The sort direction must be 'asc' or 'desc'.";

pub const SORT_FIELD_NAME: &str = "name";
pub const SORT_FIELD_BRAND_NAME: &str = "brandName";
pub const SORT_FIELD_CATEGORY_NAME: &str = "categoryName";
pub const ORDER_ASC: &str = "asc";
pub const ORDER_DESC: &str = "desc";
