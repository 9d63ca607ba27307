// src/presentation/http/controllers/params.rs
use crate::application::use_cases::ListQuery;
use crate::domain::constants::{ORDER_ASC, SORT_FIELD_NAME};
use crate::presentation::http::error::{HttpError, HttpResult};
use axum::{
    Json,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

fn default_sort_by() -> String {
    SORT_FIELD_NAME.to_string()
}

fn default_sort_direction() -> String {
    ORDER_ASC.to_string()
}

/// Query string accepted by every listing endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Zero-based page number.
    #[serde(default)]
    pub page: Option<i64>,
    /// Number of elements per page.
    #[serde(default)]
    pub size: Option<i64>,
    /// `name` unless given. Articles also accept `brandName` and `categoryName`.
    #[serde(default = "default_sort_by", alias = "sortBy")]
    pub sort_by: String,
    /// `asc` or `desc`, `asc` unless given.
    #[serde(default = "default_sort_direction", alias = "sortDirection")]
    pub sort_direction: String,
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        ListQuery::new(
            params.page,
            params.size,
            Some(&params.sort_by),
            Some(&params.sort_direction),
        )
    }
}

/// Turns a malformed query string into the JSON error body used everywhere else.
pub fn list_query(params: Result<Query<ListParams>, QueryRejection>) -> HttpResult<ListQuery> {
    params
        .map(|Query(params)| params.into())
        .map_err(|rejection| HttpError::bad_request(rejection.body_text()))
}

pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> HttpResult<T> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| HttpError::bad_request(rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_parameters_accept_camel_case_names() {
        let params: ListParams =
            serde_json::from_str(r#"{"page":0,"size":5,"sortBy":"brandName","sortDirection":"desc"}"#)
                .unwrap();
        assert_eq!(params.sort_by, "brandName");
        assert_eq!(params.sort_direction, "desc");
    }

    #[test]
    fn missing_paging_stays_missing() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        let query = ListQuery::from(params);
        assert_eq!(query.page, None);
        assert_eq!(query.size, None);
        assert_eq!(query.sort_by.as_deref(), Some("name"));
        assert_eq!(query.sort_direction.as_deref(), Some("asc"));
    }
}
