//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{
    Article, NewArticle, NewQuestion, NewReply, PublicationStatus, Question,
};

/// Create a test question with zero engagement
pub fn test_question(id: &str) -> Question {
    Question {
        id: id.to_string(),
        title: format!("Question {}", id),
        body: "How do I get my toddler to sleep through the night?".to_string(),
        author_ref: "user-1".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        vote_count: 0,
        answer_count: 0,
        view_count: 0,
        category_id: Some("c1".to_string()),
        tags: vec!["sleep".to_string()],
        attachments: vec![],
    }
}

/// Create a test question with specific timestamp and counters
pub fn test_question_with(
    id: &str,
    created_at: &str,
    votes: u64,
    answers: u64,
    views: u64,
) -> Question {
    Question {
        created_at: created_at.to_string(),
        vote_count: votes,
        answer_count: answers,
        view_count: views,
        ..test_question(id)
    }
}

/// Create a published test article with zero engagement
pub fn test_article(id: &str) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {}", id),
        excerpt: "Five gentle ways to introduce solid food.".to_string(),
        content: "Start with single-ingredient purees and watch for reactions.".to_string(),
        author_ref: "expert-1".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        view_count: 0,
        like_count: 0,
        comment_count: 0,
        publication_status: PublicationStatus::Published,
        thumbnail: None,
        category_id: Some("c2".to_string()),
    }
}

/// Create a published test article with specific timestamp and counters
pub fn test_article_with(
    id: &str,
    created_at: &str,
    likes: u64,
    comments: u64,
    views: u64,
) -> Article {
    Article {
        created_at: created_at.to_string(),
        like_count: likes,
        comment_count: comments,
        view_count: views,
        ..test_article(id)
    }
}

/// Create a valid question submission
pub fn new_question(title: &str) -> NewQuestion {
    NewQuestion {
        title: title.to_string(),
        body: "Any advice from other parents?".to_string(),
        author_ref: "user-1".to_string(),
        category_id: None,
        tags: vec![],
        attachments: vec![],
    }
}

/// Create a valid article submission
pub fn new_article(title: &str) -> NewArticle {
    NewArticle {
        title: title.to_string(),
        excerpt: "What we learned in the first month.".to_string(),
        content: "Every baby is different, so follow their cues.".to_string(),
        author_ref: "expert-1".to_string(),
        category_id: Some("c1".to_string()),
        thumbnail: None,
    }
}

/// Create a reply submission
pub fn new_reply(body: &str) -> NewReply {
    NewReply {
        author_ref: "user-2".to_string(),
        body: body.to_string(),
    }
}
