//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod content;
pub mod feed;

pub use content::{
    Article, Attachment, ContentItem, ContentKind, ContentSnapshot, MediaType, NewArticle,
    NewQuestion, NewReply, PublicationStatus, Question, Reply, Vote,
};
pub use feed::{FeedEntry, QuestionSort, SortMode, TypeFilter};
