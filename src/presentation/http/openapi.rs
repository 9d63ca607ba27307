// src/presentation/http/openapi.rs
use crate::application::dto::{
    ArticleDto, BrandDto, BrandSummaryDto, CategoryDto, CategorySummaryDto, PageDto,
};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";
const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

macro_rules! page_response {
    ($name:ident, $item:ty) => {
        /// Page of results with paging metadata.
        #[derive(Debug, Serialize, Deserialize, ToSchema)]
        pub struct $name {
            pub content: Vec<$item>,
            pub page: u64,
            pub size: u64,
            pub total_elements: u64,
            pub total_pages: u64,
            pub first: bool,
            pub last: bool,
            pub empty: bool,
        }

        impl From<PageDto<$item>> for $name {
            fn from(page: PageDto<$item>) -> Self {
                Self {
                    content: page.content,
                    page: page.page,
                    size: page.size,
                    total_elements: page.total_elements,
                    total_pages: page.total_pages,
                    first: page.first,
                    last: page.last,
                    empty: page.empty,
                }
            }
        }
    };
}

page_response!(CategoryPageResponse, CategoryDto);
page_response!(BrandPageResponse, BrandDto);
page_response!(ArticlePageResponse, ArticleDto);

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::brands::create_brand,
        crate::presentation::http::controllers::brands::list_brands,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::list_articles,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            CategoryPageResponse,
            BrandPageResponse,
            ArticlePageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::presentation::http::controllers::brands::CreateBrandRequest,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            CategoryDto,
            BrandDto,
            ArticleDto,
            BrandSummaryDto,
            CategorySummaryDto
        )
    ),
    tags(
        (name = "Categories", description = "Category catalog endpoints"),
        (name = "Brands", description = "Brand catalog endpoints"),
        (name = "Articles", description = "Article catalog endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Stock Catalog API",
        description = "Categories, brands and articles of the stock catalog",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls = env::var("PUBLIC_API_URLS")
            .map(|value| server_urls(&value))
            .unwrap_or_default();
        if urls.is_empty() {
            urls.push(DEFAULT_SERVER_URL.to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

fn server_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.trim_end_matches('/').to_string())
        .collect()
}

/// Swagger UI at `/docs`, backed by the document served at `/openapi.json`.
pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let document = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/categories",
            "/api/v1/brands",
            "/api/v1/articles",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn server_urls_are_trimmed() {
        assert_eq!(
            server_urls(" https://api.example/ ,,http://localhost:8080"),
            vec!["https://api.example", "http://localhost:8080"]
        );
    }
}
