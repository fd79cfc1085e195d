// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::ListArticlesQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleListParams {
    /// Restrict to articles created in this UTC calendar year.
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: String,
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "The caller's articles.", body = [ArticleDto]),
        (status = 400, description = "Year out of range.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(&user, ListArticlesQuery { year: params.year })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Article created."),
        (status = 400, description = "Empty title or content.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<StatusCode> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok(StatusCode::OK)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated."),
        (status = 404, description = "No such article owned by the caller."),
        (status = 400, description = "Empty title or content.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<StatusCode> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
    };

    let outcome = state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()?;

    Ok(match outcome {
        Some(()) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    })
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete."),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::OK)
}
