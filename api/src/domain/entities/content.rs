//! Content domain entities
//!
//! Questions and articles are the two kinds of community content that
//! flow into the home feed. Both are plain records; engagement counters
//! are kept as unsigned integers so they can never go negative.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Kind of content item. Together with the item id it forms the composite
/// key `(kind, id)` used for navigation, since ids are only unique within
/// their own collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Question,
    Article,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Question => write!(f, "question"),
            ContentKind::Article => write!(f, "article"),
        }
    }
}

/// Accepts the singular kind and the plural collection name, so both
/// `question` and `questions` select the same kind.
impl std::str::FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question" | "questions" => Ok(ContentKind::Question),
            "article" | "articles" => Ok(ContentKind::Article),
            _ => Err(DomainError::InvalidArgument(format!(
                "unknown content kind '{}' (expected question or article)",
                s
            ))),
        }
    }
}

/// Moderation status of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    #[default]
    #[serde(alias = "draft-pending")]
    Pending,
    Published,
}

impl std::fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublicationStatus::Pending => write!(f, "pending"),
            PublicationStatus::Published => write!(f, "published"),
        }
    }
}

/// Type of attached media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Image,
    Video,
    Youtube,
}

/// Reference to a media file attached to a question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub media_type: MediaType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// A Q&A question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author_ref: String,
    /// ISO-8601 timestamp; lexicographic order equals chronological order
    pub created_at: String,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub answer_count: u64,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// A blog article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Full text of the post; feeds only show the excerpt
    #[serde(default)]
    pub content: String,
    pub author_ref: String,
    pub created_at: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub publication_status: PublicationStatus,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.publication_status == PublicationStatus::Published
    }
}

/// Either kind of content, tagged with its kind on the wire
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentItem {
    Question(Question),
    Article(Article),
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Question(_) => ContentKind::Question,
            ContentItem::Article(_) => ContentKind::Article,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ContentItem::Question(q) => &q.id,
            ContentItem::Article(a) => &a.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentItem::Question(q) => &q.title,
            ContentItem::Article(a) => &a.title,
        }
    }

    pub fn created_at(&self) -> &str {
        match self {
            ContentItem::Question(q) => &q.created_at,
            ContentItem::Article(a) => &a.created_at,
        }
    }

    pub fn category_id(&self) -> Option<&str> {
        match self {
            ContentItem::Question(q) => q.category_id.as_deref(),
            ContentItem::Article(a) => a.category_id.as_deref(),
        }
    }

    pub fn view_count(&self) -> u64 {
        match self {
            ContentItem::Question(q) => q.view_count,
            ContentItem::Article(a) => a.view_count,
        }
    }

    /// Votes for a question, likes for an article
    pub fn primary_count(&self) -> u64 {
        match self {
            ContentItem::Question(q) => q.vote_count,
            ContentItem::Article(a) => a.like_count,
        }
    }

    /// Answers for a question, comments for an article
    pub fn secondary_count(&self) -> u64 {
        match self {
            ContentItem::Question(q) => q.answer_count,
            ContentItem::Article(a) => a.comment_count,
        }
    }
}

/// An answer to a question or a comment on an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub author_ref: String,
    pub body: String,
    pub created_at: String,
}

/// Data needed to create a new question
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub title: String,
    pub body: String,
    pub author_ref: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Data needed to create a new article
#[derive(Debug, Clone, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author_ref: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Data needed to add an answer or a comment
#[derive(Debug, Clone, Deserialize)]
pub struct NewReply {
    pub author_ref: String,
    pub body: String,
}

/// Direction of a vote on a question or a like on an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    /// Apply the vote to a counter, saturating at zero
    pub fn apply(self, count: u64) -> u64 {
        match self {
            Vote::Up => count.saturating_add(1),
            Vote::Down => count.saturating_sub(1),
        }
    }
}

/// Immutable view of both collections at one store version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub articles: Vec<Article>,
}
