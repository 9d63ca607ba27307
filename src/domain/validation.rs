// src/domain/validation.rs
//! Field rules for catalog entities.
//!
//! Every rule appends to a caller-owned [`ValidationErrors`] instead of
//! returning early, so a use case can run all of them and report the full list.
use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::domain::constants::*;
use crate::domain::errors::ValidationErrors;
use crate::domain::pagination::{PageRequest, SortDirection, SortKey};

/// Length limits and messages for entities shaped as `name` + `description`.
#[derive(Debug, Clone, Copy)]
pub struct DescribedEntityRules {
    pub name_max: usize,
    pub name_too_long: &'static str,
    pub description_max: usize,
    pub description_too_long: &'static str,
}

pub const CATEGORY_RULES: DescribedEntityRules = DescribedEntityRules {
    name_max: CATEGORY_NAME_MAX,
    name_too_long: CATEGORY_NAME_TOO_LONG,
    description_max: CATEGORY_DESCRIPTION_MAX,
    description_too_long: CATEGORY_DESCRIPTION_TOO_LONG,
};

pub const BRAND_RULES: DescribedEntityRules = DescribedEntityRules {
    name_max: BRAND_NAME_MAX,
    name_too_long: BRAND_NAME_TOO_LONG,
    description_max: BRAND_DESCRIPTION_MAX,
    description_too_long: BRAND_DESCRIPTION_TOO_LONG,
};

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn require_text(value: &str, message: &str, errors: &mut ValidationErrors) {
    if is_blank(value) {
        errors.push(message);
    }
}

/// Lengths are counted in characters, not bytes.
pub fn limit_length(value: &str, max: usize, message: &str, errors: &mut ValidationErrors) {
    if value.chars().count() > max {
        errors.push(message);
    }
}

pub fn check_described_entity(
    name: &str,
    description: &str,
    rules: &DescribedEntityRules,
    errors: &mut ValidationErrors,
) {
    require_text(name, FIELD_NAME_EMPTY, errors);
    limit_length(name, rules.name_max, rules.name_too_long, errors);
    require_text(description, FIELD_DESCRIPTION_EMPTY, errors);
    limit_length(
        description,
        rules.description_max,
        rules.description_too_long,
        errors,
    );
}

/// Returns the price when it is present and strictly positive.
pub fn check_price(price: Option<Decimal>, errors: &mut ValidationErrors) -> Option<Decimal> {
    match price {
        None => {
            errors.push(FIELD_PRICE_MISSING);
            None
        }
        Some(value) if value <= Decimal::ZERO => {
            errors.push(FIELD_PRICE_NOT_POSITIVE);
            None
        }
        valid => valid,
    }
}

/// Returns the quantity when it is present and not negative.
pub fn check_quantity(quantity: Option<i32>, errors: &mut ValidationErrors) -> Option<i32> {
    match quantity {
        None => {
            errors.push(FIELD_QUANTITY_MISSING);
            None
        }
        Some(value) if value < 0 => {
            errors.push(FIELD_QUANTITY_NEGATIVE);
            None
        }
        valid => valid,
    }
}

pub fn check_category_count(category_ids: &[i64], errors: &mut ValidationErrors) {
    if category_ids.len() < ARTICLE_CATEGORIES_MIN {
        errors.push(ARTICLE_CATEGORIES_EMPTY);
    } else if category_ids.len() > ARTICLE_CATEGORIES_MAX {
        errors.push(ARTICLE_CATEGORIES_TOO_MANY);
    }
}

/// Reports one duplicate message per repeated id and returns the distinct ids
/// in first-occurrence order.
pub fn distinct_category_ids(category_ids: &[i64], errors: &mut ValidationErrors) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(category_ids.len());
    let mut distinct = Vec::with_capacity(category_ids.len());
    for &id in category_ids {
        if seen.insert(id) {
            distinct.push(id);
        } else {
            errors.push(ARTICLE_CATEGORIES_DUPLICATE);
        }
    }
    distinct
}

/// Raw listing parameters as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPageParams<'a> {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort_by: Option<&'a str>,
    pub sort_direction: Option<&'a str>,
}

/// Runs the four independent listing checks. Returns a typed request only when
/// none of them failed.
pub fn check_page_request<K: SortKey>(
    params: RawPageParams<'_>,
    errors: &mut ValidationErrors,
) -> Option<PageRequest<K>> {
    let page = match params.page {
        None => {
            errors.push(PAGE_NUMBER_MISSING);
            None
        }
        Some(value) => u64::try_from(value).ok().or_else(|| {
            errors.push(PAGE_NUMBER_NEGATIVE);
            None
        }),
    };

    let size = match params.size {
        None => {
            errors.push(PAGE_SIZE_MISSING);
            None
        }
        Some(value) => u64::try_from(value).ok().filter(|size| *size > 0).or_else(|| {
            errors.push(PAGE_SIZE_NOT_POSITIVE);
            None
        }),
    };

    let sort_by = params.sort_by.and_then(K::parse);
    if sort_by.is_none() {
        errors.push(SORT_FIELD_INVALID);
    }

    let direction = params.sort_direction.and_then(SortDirection::parse);
    if direction.is_none() {
        errors.push(SORT_DIRECTION_INVALID);
    }

    Some(PageRequest {
        page: page?,
        size: size?,
        sort_by: sort_by?,
        direction: direction?,
    })
}
