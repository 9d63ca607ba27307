// tests/support/builders.rs
use rust_decimal::Decimal;
use std::str::FromStr;

use stock_catalog::application::use_cases::ListQuery;
use stock_catalog::application::use_cases::articles::{
    CreateArticleCommand, CreateArticleCommandBuilder,
};
use stock_catalog::application::use_cases::brands::CreateBrandCommand;
use stock_catalog::application::use_cases::categories::CreateCategoryCommand;

pub fn dec(raw: &str) -> Decimal {
    Decimal::from_str(raw).expect("valid decimal literal")
}

pub fn category_command(name: impl Into<String>, description: impl Into<String>) -> CreateCategoryCommand {
    CreateCategoryCommand {
        name: name.into(),
        description: description.into(),
    }
}

pub fn brand_command(name: impl Into<String>, description: impl Into<String>) -> CreateBrandCommand {
    CreateBrandCommand {
        name: name.into(),
        description: description.into(),
    }
}

/// Article builder pre-filled with valid values; tests override the fields they exercise.
pub fn article_command(brand_id: i64, category_ids: &[i64]) -> CreateArticleCommandBuilder {
    CreateArticleCommand::builder()
        .name("Galaxy S24")
        .description("Flagship phone")
        .price(dec("999.99"))
        .quantity(10)
        .brand_id(brand_id)
        .category_ids(category_ids.iter().copied())
}

pub fn first_page(size: i64) -> ListQuery {
    ListQuery::new(Some(0), Some(size), Some("name"), Some("asc"))
}

pub fn sorted_page(size: i64, sort_by: &str, direction: &str) -> ListQuery {
    ListQuery::new(Some(0), Some(size), Some(sort_by), Some(direction))
}
