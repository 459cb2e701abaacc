//! Feed handlers
//!
//! Home feed, top-viewed widget and the Q&A hub listing.
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/plain.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{text, wants_json};
use crate::app::feed_composer::MAX_TOP_VIEWED;
use crate::domain::entities::{QuestionSort, SortMode, TypeFilter};
use crate::error::AppError;
use crate::feed::{render_feed, render_qa_hub, render_top_viewed};
use crate::AppState;

/// Query params for GET /feed
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    #[serde(rename = "type")]
    pub type_filter: Option<String>,
    pub sort: Option<String>,
}

/// Query params for GET /feed/top-viewed
#[derive(Debug, Deserialize)]
pub struct TopViewedParams {
    pub limit: Option<usize>,
}

/// Query params for GET /questions
#[derive(Debug, Deserialize)]
pub struct QaHubParams {
    pub sort: Option<String>,
    pub category: Option<String>,
}

/// GET /feed?type=all|question|article&sort=newest|trending
///
/// Unknown `type` or `sort` values are rejected with 400 rather than
/// falling back to a default.
pub async fn get_feed(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let type_filter = match params.type_filter.as_deref() {
        Some(raw) => raw.parse::<TypeFilter>()?,
        None => TypeFilter::default(),
    };
    let sort_mode = match params.sort.as_deref() {
        Some(raw) => raw.parse::<SortMode>()?,
        None => SortMode::default(),
    };

    let feed = state.feed_service.home_feed(type_filter, sort_mode).await?;

    if wants_json(&headers) {
        Ok(Json(feed).into_response())
    } else {
        Ok(text(render_feed(&feed)))
    }
}

/// GET /feed/top-viewed?limit=N
pub async fn get_top_viewed(
    State(state): State<AppState>,
    Query(params): Query<TopViewedParams>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let limit = params.limit.unwrap_or(state.config.top_viewed_limit);
    if limit == 0 {
        return Err(AppError::BadRequest(
            "limit must be at least 1".to_string(),
        ));
    }
    let limit = limit.min(MAX_TOP_VIEWED);

    let entries = state.feed_service.top_viewed(limit).await?;

    if wants_json(&headers) {
        Ok(Json(entries).into_response())
    } else {
        Ok(text(render_top_viewed(&entries)))
    }
}

/// GET /questions?sort=newest|hot|unanswered&category=ID
pub async fn get_qa_hub(
    State(state): State<AppState>,
    Query(params): Query<QaHubParams>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let sort = match params.sort.as_deref() {
        Some(raw) => raw.parse::<QuestionSort>()?,
        None => QuestionSort::default(),
    };

    let category = params.category.filter(|c| !c.is_empty());

    let hub = state.feed_service.qa_hub(sort, category).await?;

    if wants_json(&headers) {
        Ok(Json(hub).into_response())
    } else {
        Ok(text(render_qa_hub(&hub)))
    }
}
