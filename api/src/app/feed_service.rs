//! Feed service
//!
//! Reads the current content snapshot and hands it to the feed composer.
//! Holds no state of its own beyond the store handle.

use std::sync::Arc;

use serde::Serialize;

use crate::app::feed_composer::{compose_feed, compose_qa_hub, top_viewed};
use crate::domain::entities::{FeedEntry, QuestionSort, SortMode, TypeFilter};
use crate::domain::ports::ContentStore;
use crate::error::AppError;

/// A composed home feed together with the selection that produced it
#[derive(Debug, Clone, Serialize)]
pub struct Feed {
    pub type_filter: TypeFilter,
    pub sort_mode: SortMode,
    /// Store version the feed was composed from
    pub version: u64,
    pub entries: Vec<FeedEntry>,
}

/// The question-only Q&A hub listing
#[derive(Debug, Clone, Serialize)]
pub struct QaHub {
    pub sort: QuestionSort,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub version: u64,
    pub entries: Vec<FeedEntry>,
}

/// Service for composing feeds from the content store
pub struct FeedService<CS>
where
    CS: ContentStore,
{
    content: Arc<CS>,
}

impl<CS> FeedService<CS>
where
    CS: ContentStore,
{
    pub fn new(content: Arc<CS>) -> Self {
        Self { content }
    }

    /// Compose the home feed for the selected type filter and sort mode
    pub async fn home_feed(
        &self,
        type_filter: TypeFilter,
        sort_mode: SortMode,
    ) -> Result<Feed, AppError> {
        let snapshot = self.content.snapshot().await?;
        let entries = compose_feed(
            &snapshot.questions,
            &snapshot.articles,
            type_filter,
            sort_mode,
        );

        tracing::debug!(
            %type_filter,
            %sort_mode,
            version = snapshot.version,
            entries = entries.len(),
            "Composed home feed"
        );

        Ok(Feed {
            type_filter,
            sort_mode,
            version: snapshot.version,
            entries,
        })
    }

    /// Most viewed items for the sidebar widget
    pub async fn top_viewed(&self, limit: usize) -> Result<Vec<FeedEntry>, AppError> {
        let snapshot = self.content.snapshot().await?;
        Ok(top_viewed(&snapshot.questions, &snapshot.articles, limit))
    }

    /// Question listing for the Q&A hub
    pub async fn qa_hub(
        &self,
        sort: QuestionSort,
        category: Option<String>,
    ) -> Result<QaHub, AppError> {
        let snapshot = self.content.snapshot().await?;
        let entries = compose_qa_hub(&snapshot.questions, sort, category.as_deref());
        Ok(QaHub {
            sort,
            category,
            version: snapshot.version,
            entries,
        })
    }
}
