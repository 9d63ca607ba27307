use crate::domain::constants::{
    ARTICLE_EXISTS, BRAND_EXISTS, CATEGORY_EXISTS, FIELD_PRICE_NOT_POSITIVE,
    FIELD_QUANTITY_NEGATIVE,
};
use crate::domain::errors::DomainError;

const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_BRAND_NAME: &str = "brands_name_key";
const CNT_ARTICLE_NAME: &str = "articles_name_key";
const CNT_ARTICLE_BRAND: &str = "articles_brand_id_fkey";
const CNT_ARTICLE_CATEGORY: &str = "article_categories_category_id_fkey";
const CNT_ARTICLE_PRICE_CHECK: &str = "articles_price_positive_chk";
const CNT_ARTICLE_QUANTITY_CHECK: &str = "articles_quantity_non_negative_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(mapped) = db_err.constraint().and_then(map_constraint) {
                return mapped;
            }
            if let Some(mapped) = db_err.code().and_then(|code| map_sqlstate(&code)) {
                return mapped;
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> Option<DomainError> {
    let mapped = match constraint {
        CNT_CATEGORY_NAME => DomainError::Conflict(CATEGORY_EXISTS.into()),
        CNT_BRAND_NAME => DomainError::Conflict(BRAND_EXISTS.into()),
        CNT_ARTICLE_NAME => DomainError::Conflict(ARTICLE_EXISTS.into()),
        CNT_ARTICLE_BRAND => DomainError::NotFound("brand not found".into()),
        CNT_ARTICLE_CATEGORY => DomainError::NotFound("category not found".into()),
        CNT_ARTICLE_PRICE_CHECK => DomainError::invalid(FIELD_PRICE_NOT_POSITIVE),
        CNT_ARTICLE_QUANTITY_CHECK => DomainError::invalid(FIELD_QUANTITY_NEGATIVE),
        _ => return None,
    };
    Some(mapped)
}

fn map_sqlstate(code: &str) -> Option<DomainError> {
    match code {
        "23505" => Some(DomainError::Conflict("unique constraint violated".into())),
        "23503" => Some(DomainError::NotFound("referenced record not found".into())),
        "23514" => Some(DomainError::invalid("check constraint violated")),
        _ => None,
    }
}
