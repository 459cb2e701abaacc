//! In-memory content store
//!
//! Keeps both collections behind a lock and publishes an immutable
//! `ContentSnapshot` through a `watch` channel after every mutation.
//! New items are inserted at the front, so snapshots list content
//! newest-first.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use anyhow::Context;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tokio::sync::watch;
use uuid::Uuid;

use crate::domain::entities::{
    Article, ContentKind, ContentSnapshot, NewArticle, NewQuestion, NewReply, PublicationStatus,
    Question, Reply, Vote,
};
use crate::domain::ports::ContentStore;
use crate::error::DomainError;

#[derive(Default)]
struct Collections {
    version: u64,
    questions: Vec<Question>,
    articles: Vec<Article>,
    replies: HashMap<(ContentKind, String), Vec<Reply>>,
}

impl Collections {
    fn to_snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            version: self.version,
            questions: self.questions.clone(),
            articles: self.articles.clone(),
        }
    }

    fn question_mut(&mut self, id: &str) -> Result<&mut Question, DomainError> {
        self.questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("question {}", id)))
    }

    fn article_mut(&mut self, id: &str) -> Result<&mut Article, DomainError> {
        self.articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("article {}", id)))
    }

    fn exists(&self, kind: ContentKind, id: &str) -> bool {
        match kind {
            ContentKind::Question => self.questions.iter().any(|q| q.id == id),
            ContentKind::Article => self.articles.iter().any(|a| a.id == id),
        }
    }
}

pub struct InMemoryContentStore {
    inner: RwLock<Collections>,
    tx: watch::Sender<Arc<ContentSnapshot>>,
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(ContentSnapshot::default()));
        Self {
            inner: RwLock::new(Collections::default()),
            tx,
        }
    }

    /// Build a store pre-populated from a snapshot.
    ///
    /// Ids must be unique within each collection.
    pub fn from_snapshot(snapshot: ContentSnapshot) -> Result<Self, DomainError> {
        ensure_unique_ids("question", snapshot.questions.iter().map(|q| q.id.as_str()))?;
        ensure_unique_ids("article", snapshot.articles.iter().map(|a| a.id.as_str()))?;

        let collections = Collections {
            version: snapshot.version,
            questions: snapshot.questions,
            articles: snapshot.articles,
            replies: HashMap::new(),
        };
        let (tx, _rx) = watch::channel(Arc::new(collections.to_snapshot()));

        Ok(Self {
            inner: RwLock::new(collections),
            tx,
        })
    }

    /// Load a JSON seed file shaped like `{"questions": [...], "articles": [...]}`
    pub fn from_seed_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let snapshot: ContentSnapshot = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
        let store = Self::from_snapshot(snapshot)?;
        Ok(store)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, DomainError> {
        self.inner
            .write()
            .map_err(|_| DomainError::Internal("content store lock poisoned".to_string()))
    }

    /// Bump the version and hand subscribers a fresh snapshot
    fn publish(&self, collections: &mut Collections) {
        collections.version += 1;
        let snapshot = Arc::new(collections.to_snapshot());
        tracing::debug!(
            version = snapshot.version,
            questions = snapshot.questions.len(),
            articles = snapshot.articles.len(),
            "Published content snapshot"
        );
        self.tx.send_replace(snapshot);
    }
}

fn ensure_unique_ids<'a>(
    collection: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::Validation(format!(
                "duplicate {} id: {}",
                collection, id
            )));
        }
    }
    Ok(())
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn new_reply(reply: &NewReply) -> Reply {
    Reply {
        id: new_id(),
        author_ref: reply.author_ref.clone(),
        body: reply.body.clone(),
        created_at: now_iso(),
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn snapshot(&self) -> Result<Arc<ContentSnapshot>, DomainError> {
        Ok(self.tx.borrow().clone())
    }

    fn subscribe(&self) -> watch::Receiver<Arc<ContentSnapshot>> {
        self.tx.subscribe()
    }

    async fn find_question(&self, id: &str) -> Result<Option<Question>, DomainError> {
        let snapshot = self.tx.borrow().clone();
        Ok(snapshot.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn find_article(&self, id: &str) -> Result<Option<Article>, DomainError> {
        let snapshot = self.tx.borrow().clone();
        Ok(snapshot.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn create_question(&self, question: &NewQuestion) -> Result<Question, DomainError> {
        let created = Question {
            id: new_id(),
            title: question.title.clone(),
            body: question.body.clone(),
            author_ref: question.author_ref.clone(),
            created_at: now_iso(),
            vote_count: 0,
            answer_count: 0,
            view_count: 0,
            category_id: question.category_id.clone(),
            tags: question.tags.clone(),
            attachments: question.attachments.clone(),
        };

        let mut inner = self.write()?;
        inner.questions.insert(0, created.clone());
        self.publish(&mut inner);
        Ok(created)
    }

    async fn create_article(&self, article: &NewArticle) -> Result<Article, DomainError> {
        let created = Article {
            id: new_id(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            author_ref: article.author_ref.clone(),
            created_at: now_iso(),
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            publication_status: PublicationStatus::Pending,
            thumbnail: article.thumbnail.clone(),
            category_id: article.category_id.clone(),
        };

        let mut inner = self.write()?;
        inner.articles.insert(0, created.clone());
        self.publish(&mut inner);
        Ok(created)
    }

    async fn vote_question(&self, id: &str, vote: Vote) -> Result<Question, DomainError> {
        let mut inner = self.write()?;
        let question = inner.question_mut(id)?;
        question.vote_count = vote.apply(question.vote_count);
        let updated = question.clone();
        self.publish(&mut inner);
        Ok(updated)
    }

    async fn like_article(&self, id: &str, vote: Vote) -> Result<Article, DomainError> {
        let mut inner = self.write()?;
        let article = inner.article_mut(id)?;
        article.like_count = vote.apply(article.like_count);
        let updated = article.clone();
        self.publish(&mut inner);
        Ok(updated)
    }

    async fn add_answer(&self, question_id: &str, reply: &NewReply) -> Result<Reply, DomainError> {
        let mut inner = self.write()?;
        let question = inner.question_mut(question_id)?;
        question.answer_count += 1;

        let answer = new_reply(reply);
        inner
            .replies
            .entry((ContentKind::Question, question_id.to_string()))
            .or_default()
            .push(answer.clone());
        self.publish(&mut inner);
        Ok(answer)
    }

    async fn add_comment(
        &self,
        article_id: &str,
        reply: &NewReply,
    ) -> Result<Reply, DomainError> {
        let mut inner = self.write()?;
        let article = inner.article_mut(article_id)?;
        article.comment_count += 1;

        let comment = new_reply(reply);
        inner
            .replies
            .entry((ContentKind::Article, article_id.to_string()))
            .or_default()
            .push(comment.clone());
        self.publish(&mut inner);
        Ok(comment)
    }

    async fn list_replies(&self, kind: ContentKind, id: &str) -> Result<Vec<Reply>, DomainError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| DomainError::Internal("content store lock poisoned".to_string()))?;
        if !inner.exists(kind, id) {
            return Err(DomainError::NotFound(format!("{} {}", kind, id)));
        }
        Ok(inner
            .replies
            .get(&(kind, id.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn record_view(&self, kind: ContentKind, id: &str) -> Result<u64, DomainError> {
        let mut inner = self.write()?;
        let views = match kind {
            ContentKind::Question => {
                let question = inner.question_mut(id)?;
                question.view_count += 1;
                question.view_count
            }
            ContentKind::Article => {
                let article = inner.article_mut(id)?;
                article.view_count += 1;
                article.view_count
            }
        };
        self.publish(&mut inner);
        Ok(views)
    }

    async fn publish_article(&self, id: &str) -> Result<Article, DomainError> {
        let mut inner = self.write()?;
        let article = inner.article_mut(id)?;
        article.publication_status = PublicationStatus::Published;
        let updated = article.clone();
        self.publish(&mut inner);
        Ok(updated)
    }
}
