// src/presentation/http/controllers/categories.rs
use super::params::{ListParams, json_body, list_query};
use crate::application::{
    dto::{CategoryDto, PageDto},
    use_cases::categories::CreateCategoryCommand,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::CategoryPageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name already taken.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    body: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let payload = json_body(body)?;
    let command = CreateCategoryCommand {
        name: payload.name,
        description: payload.description,
    };

    let created = state
        .services
        .categories
        .create_category(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(ListParams),
    responses(
        (status = 200, description = "Page of categories.", body = CategoryPageResponse),
        (status = 400, description = "Invalid paging parameters.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> HttpResult<Json<CategoryPageResponse>> {
    let query = list_query(params)?;
    let page = state
        .services
        .categories
        .list_categories(query)
        .await
        .into_http()?;

    Ok(Json(PageDto::<CategoryDto>::from_page(page).into()))
}
