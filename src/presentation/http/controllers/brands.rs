// src/presentation/http/controllers/brands.rs
use super::params::{ListParams, json_body, list_query};
use crate::application::{
    dto::{BrandDto, PageDto},
    use_cases::brands::CreateBrandCommand,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::BrandPageResponse;
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
pub struct CreateBrandRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/brands",
    request_body = CreateBrandRequest,
    responses(
        (status = 201, description = "Brand created.", body = BrandDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name already taken.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Brands"
)]
pub async fn create_brand(
    Extension(state): Extension<HttpState>,
    body: Result<Json<CreateBrandRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<BrandDto>)> {
    let payload = json_body(body)?;
    let command = CreateBrandCommand {
        name: payload.name,
        description: payload.description,
    };

    let created = state
        .services
        .brands
        .create_brand(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/brands",
    params(ListParams),
    responses(
        (status = 200, description = "Page of brands.", body = BrandPageResponse),
        (status = 400, description = "Invalid paging parameters.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Brands"
)]
pub async fn list_brands(
    Extension(state): Extension<HttpState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> HttpResult<Json<BrandPageResponse>> {
    let query = list_query(params)?;
    let page = state
        .services
        .brands
        .list_brands(query)
        .await
        .into_http()?;

    Ok(Json(PageDto::<BrandDto>::from_page(page).into()))
}
