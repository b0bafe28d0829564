use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use catalog::service::Catalog;
use common::types::Health;
use models::{project, service, team_member, testimonial};

use crate::errors::ApiError;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn list_services(State(catalog): State<Catalog>) -> Result<Json<Vec<service::Model>>, ApiError> {
    Ok(Json(catalog.list_services().await?))
}

async fn get_service(
    State(catalog): State<Catalog>,
    Path(id): Path<i32>,
) -> Result<Json<service::Model>, ApiError> {
    catalog.get_service(id).await?.map(Json).ok_or(ApiError::NotFound)
}

async fn list_team_members(State(catalog): State<Catalog>) -> Result<Json<Vec<team_member::Model>>, ApiError> {
    Ok(Json(catalog.list_team_members().await?))
}

async fn get_team_member(
    State(catalog): State<Catalog>,
    Path(id): Path<i32>,
) -> Result<Json<team_member::Model>, ApiError> {
    catalog.get_team_member(id).await?.map(Json).ok_or(ApiError::NotFound)
}

#[derive(Debug, Deserialize)]
struct ProjectsQuery {
    category: Option<String>,
}

/// A malformed or absent `category` parameter means "no filter".
async fn list_projects(
    State(catalog): State<Catalog>,
    query: Option<Query<ProjectsQuery>>,
) -> Result<Json<Vec<project::Model>>, ApiError> {
    let category = query.and_then(|Query(q)| q.category).filter(|c| !c.is_empty());
    let projects = match category {
        Some(category) => catalog.list_projects_by_category(&category).await?,
        None => catalog.list_projects().await?,
    };
    Ok(Json(projects))
}

async fn get_project(
    State(catalog): State<Catalog>,
    Path(id): Path<i32>,
) -> Result<Json<project::Model>, ApiError> {
    catalog.get_project(id).await?.map(Json).ok_or(ApiError::NotFound)
}

async fn list_testimonials(State(catalog): State<Catalog>) -> Result<Json<Vec<testimonial::Model>>, ApiError> {
    Ok(Json(catalog.list_testimonials().await?))
}

async fn get_testimonial(
    State(catalog): State<Catalog>,
    Path(id): Path<i32>,
) -> Result<Json<testimonial::Model>, ApiError> {
    catalog.get_testimonial(id).await?.map(Json).ok_or(ApiError::NotFound)
}

/// Build the full application router: static frontend, health, content API
pub fn build_router(catalog: Catalog, cors: CorsLayer) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    // Public routes (static + health)
    let public = Router::new()
        .nest_service("/", static_dir)
        .route("/health", get(health));

    // Content API routes
    let api = Router::new()
        .route("/api/services", get(list_services))
        .route("/api/services/:id", get(get_service))
        .route("/api/team", get(list_team_members))
        .route("/api/team/:id", get(get_team_member))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/:id", get(get_project))
        .route("/api/testimonials", get(list_testimonials))
        .route("/api/testimonials/:id", get(get_testimonial));

    // Compose
    public
        .merge(api)
        .with_state(catalog)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 请求到达时打点
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
