//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

use axum::{
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};

pub mod content;
pub mod feed;

pub use content::{
    answer_question, comment_on_article, create_article, create_question, get_article,
    get_question, like_article, publish_article, record_view, vote_question,
};
pub use feed::{get_feed, get_qa_hub, get_top_viewed};

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// Plain-text response for clients that did not ask for JSON
fn text(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}
