//! Content store port
//!
//! The store owns the question and article collections. Readers work from
//! immutable snapshots; every mutation publishes a new snapshot to
//! subscribers.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::entities::{
    Article, ContentKind, ContentSnapshot, NewArticle, NewQuestion, NewReply, Question, Reply,
    Vote,
};
use crate::error::DomainError;

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Current snapshot of both collections
    async fn snapshot(&self) -> Result<Arc<ContentSnapshot>, DomainError>;

    /// Receiver that yields a new snapshot after every mutation
    fn subscribe(&self) -> watch::Receiver<Arc<ContentSnapshot>>;

    /// Find a question by ID
    async fn find_question(&self, id: &str) -> Result<Option<Question>, DomainError>;

    /// Find an article by ID (any publication status)
    async fn find_article(&self, id: &str) -> Result<Option<Article>, DomainError>;

    /// Create a new question
    async fn create_question(&self, question: &NewQuestion) -> Result<Question, DomainError>;

    /// Create a new article, pending moderation
    async fn create_article(&self, article: &NewArticle) -> Result<Article, DomainError>;

    /// Vote a question up or down; the count never drops below zero
    async fn vote_question(&self, id: &str, vote: Vote) -> Result<Question, DomainError>;

    /// Like or unlike an article; the count never drops below zero
    async fn like_article(&self, id: &str, vote: Vote) -> Result<Article, DomainError>;

    /// Add an answer and bump the question's answer count
    async fn add_answer(&self, question_id: &str, reply: &NewReply) -> Result<Reply, DomainError>;

    /// Add a comment and bump the article's comment count
    async fn add_comment(&self, article_id: &str, reply: &NewReply)
        -> Result<Reply, DomainError>;

    /// Answers (questions) or comments (articles), oldest first
    async fn list_replies(&self, kind: ContentKind, id: &str) -> Result<Vec<Reply>, DomainError>;

    /// Bump the view count of a question or article
    async fn record_view(&self, kind: ContentKind, id: &str) -> Result<u64, DomainError>;

    /// Approve a pending article
    async fn publish_article(&self, id: &str) -> Result<Article, DomainError>;
}
