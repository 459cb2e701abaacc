//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the feed composer.

pub mod content_service;
pub mod feed_composer;
pub mod feed_service;

pub use content_service::{ArticleThread, ContentService, QuestionThread};
pub use feed_service::{Feed, FeedService, QaHub};
