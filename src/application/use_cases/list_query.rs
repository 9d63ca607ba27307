// src/application/use_cases/list_query.rs
use super::reject;
use crate::application::error::ApplicationResult;
use crate::domain::errors::ValidationErrors;
use crate::domain::pagination::{PageRequest, SortKey};
use crate::domain::validation::{RawPageParams, check_page_request};

/// Listing parameters exactly as a caller supplied them. Missing values are
/// kept as `None` so they can be reported separately from out-of-range ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

impl ListQuery {
    pub fn new(
        page: Option<i64>,
        size: Option<i64>,
        sort_by: Option<&str>,
        sort_direction: Option<&str>,
    ) -> Self {
        Self {
            page,
            size,
            sort_by: sort_by.map(str::to_owned),
            sort_direction: sort_direction.map(str::to_owned),
        }
    }

    pub(crate) fn page_request<K: SortKey>(
        &self,
        operation: &'static str,
    ) -> ApplicationResult<PageRequest<K>> {
        let mut errors = ValidationErrors::new();
        let params = RawPageParams {
            page: self.page,
            size: self.size,
            sort_by: self.sort_by.as_deref(),
            sort_direction: self.sort_direction.as_deref(),
        };

        match check_page_request::<K>(params, &mut errors) {
            Some(request) if errors.is_empty() => Ok(request),
            _ => Err(reject(operation, errors)),
        }
    }
}
