use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::Pagination;

use crate::errors::JsonApiError;
use crate::metrics;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod companies;
pub mod employees;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Query string shared by the list endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page; requires `pageSize`
    pub page: Option<i64>,
    /// items per page; requires `page`
    pub page_size: Option<i64>,
    /// case-insensitive exact gender match (employees only)
    pub gender: Option<String>,
}

impl ListQuery {
    pub fn pagination(&self) -> Result<Option<Pagination>, JsonApiError> {
        Ok(Pagination::from_parts(self.page, self.page_size)?)
    }
}

pub(crate) fn json_rejection(e: JsonRejection) -> JsonApiError {
    JsonApiError::bad_request(e.body_text())
}

pub(crate) fn query_rejection(e: QueryRejection) -> JsonApiError {
    JsonApiError::bad_request(e.body_text())
}

/// Build the full application router: directory resources, health, metrics and API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/companies", get(companies::list).post(companies::create))
        .route(
            "/companies/:id",
            get(companies::get).put(companies::replace).delete(companies::delete),
        )
        .route("/companies/:id/employees", get(companies::employees))
        .route("/employees", get(employees::list).post(employees::create))
        .route(
            "/employees/:id",
            get(employees::get).put(employees::replace).delete(employees::delete),
        )
        .with_state(state);

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler));

    api.merge(ops)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
