//! Content handlers
//!
//! Create, read and engage with questions and articles.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{text, wants_json};
use crate::domain::entities::{ContentKind, NewArticle, NewQuestion, NewReply, Vote};
use crate::error::AppError;
use crate::feed::{render_article_thread, render_question_thread};
use crate::AppState;

/// Request body for vote and like endpoints
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub direction: Vote,
}

/// Response for POST /content/:kind/:id/view
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub kind: ContentKind,
    pub id: String,
    pub view_count: u64,
}

/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    Json(body): Json<NewQuestion>,
) -> Result<Response, AppError> {
    let question = state.content_service.ask_question(body).await?;
    Ok((StatusCode::CREATED, Json(question)).into_response())
}

/// GET /questions/:id
///
/// Returns the question with its answers.
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let thread = state.content_service.question_thread(&id).await?;

    if wants_json(&headers) {
        Ok(Json(thread).into_response())
    } else {
        Ok(text(render_question_thread(&thread)))
    }
}

/// POST /questions/:id/vote
pub async fn vote_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<VoteRequest>,
) -> Result<Response, AppError> {
    let question = state
        .content_service
        .vote_question(&id, body.direction)
        .await?;
    Ok(Json(question).into_response())
}

/// POST /questions/:id/answers
pub async fn answer_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<NewReply>,
) -> Result<Response, AppError> {
    let answer = state.content_service.answer_question(&id, body).await?;
    Ok((StatusCode::CREATED, Json(answer)).into_response())
}

/// POST /articles
///
/// New articles wait for moderation before they reach the feed.
pub async fn create_article(
    State(state): State<AppState>,
    Json(body): Json<NewArticle>,
) -> Result<Response, AppError> {
    let article = state.content_service.submit_article(body).await?;
    Ok((StatusCode::CREATED, Json(article)).into_response())
}

/// GET /articles/:id
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let thread = state.content_service.article_thread(&id).await?;

    if wants_json(&headers) {
        Ok(Json(thread).into_response())
    } else {
        Ok(text(render_article_thread(&thread)))
    }
}

/// POST /articles/:id/like
pub async fn like_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<VoteRequest>,
) -> Result<Response, AppError> {
    let article = state
        .content_service
        .like_article(&id, body.direction)
        .await?;
    Ok(Json(article).into_response())
}

/// POST /articles/:id/comments
pub async fn comment_on_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<NewReply>,
) -> Result<Response, AppError> {
    let comment = state.content_service.comment_on_article(&id, body).await?;
    Ok((StatusCode::CREATED, Json(comment)).into_response())
}

/// POST /articles/:id/publish
pub async fn publish_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let article = state.content_service.publish_article(&id).await?;
    Ok(Json(article).into_response())
}

/// POST /content/:kind/:id/view
///
/// `kind` is `question` or `article` (plural collection names work too).
pub async fn record_view(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<ViewResponse>, AppError> {
    let kind = kind.parse::<ContentKind>()?;
    let view_count = state.content_service.record_view(kind, &id).await?;
    Ok(Json(ViewResponse {
        kind,
        id,
        view_count,
    }))
}
