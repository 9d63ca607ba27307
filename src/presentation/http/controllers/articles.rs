// src/presentation/http/controllers/articles.rs
use super::params::{ListParams, json_body, list_query};
use crate::application::{
    dto::{ArticleDto, PageDto},
    use_cases::articles::CreateArticleCommand,
};
use crate::domain::constants::{
    ARTICLE_CATEGORY_IDS_REQUEST_MAX, ARTICLE_CATEGORY_IDS_REQUEST_TOO_LARGE,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::ArticlePageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = Option<String>, example = "19.99")]
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default, alias = "brandId")]
    pub brand_id: Option<i64>,
    #[serde(default, alias = "categoryIds")]
    #[schema(max_items = 16)]
    pub category_ids: Vec<i64>,
}

impl CreateArticleRequest {
    /// Refuses oversized category lists so they never reach the per-id lookups.
    pub fn into_command(self) -> HttpResult<CreateArticleCommand> {
        if self.category_ids.len() > ARTICLE_CATEGORY_IDS_REQUEST_MAX {
            return Err(HttpError::bad_request(ARTICLE_CATEGORY_IDS_REQUEST_TOO_LARGE));
        }
        Ok(self.into())
    }
}

impl From<CreateArticleRequest> for CreateArticleCommand {
    fn from(request: CreateArticleRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            quantity: request.quantity,
            brand_id: request.brand_id,
            category_ids: request.category_ids,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name already taken.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    body: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = json_body(body)?.into_command()?;

    let created = state
        .services
        .articles
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ListParams),
    responses(
        (status = 200, description = "Page of articles.", body = ArticlePageResponse),
        (status = 400, description = "Invalid paging parameters.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> HttpResult<Json<ArticlePageResponse>> {
    let query = list_query(params)?;
    let page = state
        .services
        .articles
        .list_articles(query)
        .await
        .into_http()?;

    Ok(Json(PageDto::<ArticleDto>::from_page(page).into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_numeric_and_string_prices() {
        let numeric: CreateArticleRequest = serde_json::from_str(
            r#"{"name":"Phone","description":"Smart","price":199.99,"quantity":3,"brand_id":1,"category_ids":[1,2]}"#,
        )
        .unwrap();
        let text: CreateArticleRequest = serde_json::from_str(
            r#"{"name":"Phone","description":"Smart","price":"199.99","quantity":3,"brandId":1,"categoryIds":[1,2]}"#,
        )
        .unwrap();
        assert_eq!(numeric.price, text.price);
        assert_eq!(text.brand_id, Some(1));
        assert_eq!(text.category_ids, vec![1, 2]);
    }

    #[test]
    fn absent_fields_reach_the_command_as_missing() {
        let request: CreateArticleRequest = serde_json::from_str("{}").unwrap();
        let command = CreateArticleCommand::from(request);
        assert_eq!(command, CreateArticleCommand::default());
    }

    #[test]
    fn oversized_category_list_is_refused() {
        let request = |count: i64| CreateArticleRequest {
            name: "Phone".into(),
            description: "Smart".into(),
            price: Some(Decimal::new(1999, 2)),
            quantity: Some(1),
            brand_id: Some(1),
            category_ids: (1..=count).collect(),
        };

        let err = request(17).into_command().unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.messages(), [ARTICLE_CATEGORY_IDS_REQUEST_TOO_LARGE]);

        let command = request(16).into_command().unwrap();
        assert_eq!(command.category_ids.len(), 16);
    }
}
