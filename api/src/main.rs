//! Nestfeed API Server
//!
//! Content service for a parenting community: Q&A questions and blog
//! articles, ranked into an engagement-scored home feed.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::InMemoryContentStore;
use app::{ContentService, FeedService};
use config::Config;
use domain::ports::ContentStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<InMemoryContentStore>>,
    pub content_service: Arc<ContentService<InMemoryContentStore>>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<InMemoryContentStore>, config: Config) -> Self {
        Self {
            feed_service: Arc::new(FeedService::new(store.clone())),
            content_service: Arc::new(ContentService::new(store)),
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Feeds
        .route("/feed", get(handlers::get_feed))
        .route("/feed/top-viewed", get(handlers::get_top_viewed))
        // Questions
        .route(
            "/questions",
            get(handlers::get_qa_hub).post(handlers::create_question),
        )
        .route("/questions/:id", get(handlers::get_question))
        .route("/questions/:id/vote", post(handlers::vote_question))
        .route("/questions/:id/answers", post(handlers::answer_question))
        // Articles
        .route("/articles", post(handlers::create_article))
        .route("/articles/:id", get(handlers::get_article))
        .route("/articles/:id/like", post(handlers::like_article))
        .route("/articles/:id/comments", post(handlers::comment_on_article))
        .route("/articles/:id/publish", post(handlers::publish_article))
        // Views
        .route("/content/:kind/:id/view", post(handlers::record_view))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Log every new content snapshot. Feeds are recomposed per request, so
/// this is the only consumer of the push side of the store.
fn spawn_snapshot_logger(store: &InMemoryContentStore) {
    let mut rx = store.subscribe();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let snapshot = rx.borrow_and_update().clone();
            tracing::debug!(
                version = snapshot.version,
                questions = snapshot.questions.len(),
                articles = snapshot.articles.len(),
                "Content snapshot updated"
            );
        }
    });
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,nestfeed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Nestfeed API...");

    // Load configuration
    let config = Config::from_env();

    // Create content store
    let store = match &config.seed_path {
        Some(path) => {
            tracing::info!("Seeding content store from {}", path);
            InMemoryContentStore::from_seed_file(path)?
        }
        None => InMemoryContentStore::new(),
    };
    let store = Arc::new(store);
    let snapshot = store.snapshot().await?;
    tracing::info!(
        questions = snapshot.questions.len(),
        articles = snapshot.articles.len(),
        "Content store ready"
    );

    spawn_snapshot_logger(&store);

    let app = build_router(AppState::new(store, config.clone()));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
