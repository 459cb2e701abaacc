//! Content service
//!
//! Validates incoming questions, articles and replies before they reach the
//! content store, and logs every mutation.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{
    Article, ContentKind, NewArticle, NewQuestion, NewReply, Question, Reply, Vote,
};
use crate::domain::ports::ContentStore;
use crate::error::{AppError, DomainError};

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_TAGS: usize = 10;

/// A question together with its answers
#[derive(Debug, Clone, Serialize)]
pub struct QuestionThread {
    pub question: Question,
    pub answers: Vec<Reply>,
}

/// An article together with its comments
#[derive(Debug, Clone, Serialize)]
pub struct ArticleThread {
    pub article: Article,
    pub comments: Vec<Reply>,
}

/// Service for creating and updating community content
pub struct ContentService<CS>
where
    CS: ContentStore,
{
    content: Arc<CS>,
}

impl<CS> ContentService<CS>
where
    CS: ContentStore,
{
    pub fn new(content: Arc<CS>) -> Self {
        Self { content }
    }

    /// Ask a new question
    pub async fn ask_question(&self, question: NewQuestion) -> Result<Question, AppError> {
        validate_title(&question.title)?;
        require("body", &question.body)?;
        require("author_ref", &question.author_ref)?;
        if question.tags.len() > MAX_TAGS {
            return Err(DomainError::Validation(format!(
                "at most {} tags are allowed",
                MAX_TAGS
            ))
            .into());
        }

        let question = NewQuestion {
            title: question.title.trim().to_string(),
            tags: question
                .tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            ..question
        };

        let created = self.content.create_question(&question).await?;
        tracing::info!(id = %created.id, author = %created.author_ref, "Question created");
        Ok(created)
    }

    /// Submit an article; it stays pending until published
    pub async fn submit_article(&self, article: NewArticle) -> Result<Article, AppError> {
        validate_title(&article.title)?;
        require("excerpt", &article.excerpt)?;
        require("content", &article.content)?;
        require("author_ref", &article.author_ref)?;

        let article = NewArticle {
            title: article.title.trim().to_string(),
            ..article
        };

        let created = self.content.create_article(&article).await?;
        tracing::info!(
            id = %created.id,
            author = %created.author_ref,
            "Article submitted for review"
        );
        Ok(created)
    }

    /// Approve a pending article so it becomes feed-eligible
    pub async fn publish_article(&self, id: &str) -> Result<Article, AppError> {
        let article = self.content.publish_article(id).await?;
        tracing::info!(id = %article.id, "Article published");
        Ok(article)
    }

    pub async fn vote_question(&self, id: &str, vote: Vote) -> Result<Question, AppError> {
        let question = self.content.vote_question(id, vote).await?;
        tracing::debug!(id, ?vote, votes = question.vote_count, "Question voted");
        Ok(question)
    }

    pub async fn like_article(&self, id: &str, vote: Vote) -> Result<Article, AppError> {
        let article = self.content.like_article(id, vote).await?;
        tracing::debug!(id, ?vote, likes = article.like_count, "Article liked");
        Ok(article)
    }

    pub async fn answer_question(&self, id: &str, reply: NewReply) -> Result<Reply, AppError> {
        validate_reply(&reply)?;
        let answer = self.content.add_answer(id, &reply).await?;
        tracing::info!(question = id, answer = %answer.id, "Answer added");
        Ok(answer)
    }

    pub async fn comment_on_article(&self, id: &str, reply: NewReply) -> Result<Reply, AppError> {
        validate_reply(&reply)?;
        let comment = self.content.add_comment(id, &reply).await?;
        tracing::info!(article = id, comment = %comment.id, "Comment added");
        Ok(comment)
    }

    pub async fn record_view(&self, kind: ContentKind, id: &str) -> Result<u64, AppError> {
        Ok(self.content.record_view(kind, id).await?)
    }

    /// Load a question with its answers
    pub async fn question_thread(&self, id: &str) -> Result<QuestionThread, AppError> {
        let question = self
            .content
            .find_question(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))?;
        let answers = self
            .content
            .list_replies(ContentKind::Question, id)
            .await?;
        Ok(QuestionThread { question, answers })
    }

    /// Load an article with its comments. Pending articles are visible by
    /// direct id so moderators can review them.
    pub async fn article_thread(&self, id: &str) -> Result<ArticleThread, AppError> {
        let article = self
            .content
            .find_article(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article {} not found", id)))?;
        let comments = self.content.list_replies(ContentKind::Article, id).await?;
        Ok(ArticleThread { article, comments })
    }
}

fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    require("title", title)?;
    if title.trim().chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::Validation(format!(
            "title must be at most {} characters",
            MAX_TITLE_LEN
        )));
    }
    Ok(())
}

fn validate_reply(reply: &NewReply) -> Result<(), DomainError> {
    require("author_ref", &reply.author_ref)?;
    require("body", &reply.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryContentStore;
    use crate::domain::entities::{Attachment, ContentSnapshot, MediaType, PublicationStatus};
    use crate::test_utils::{
        new_article, new_question, new_reply, test_article, test_question,
    };

    fn create_service() -> (ContentService<InMemoryContentStore>, Arc<InMemoryContentStore>) {
        let store = Arc::new(
            InMemoryContentStore::from_snapshot(ContentSnapshot {
                version: 0,
                questions: vec![test_question("q1")],
                articles: vec![test_article("a1")],
            })
            .unwrap(),
        );
        (ContentService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn ask_question_trims_title_and_tags() {
        let (service, _) = create_service();
        let mut question = new_question("  Teething fever?  ");
        question.tags = vec![" baby ".to_string(), "".to_string(), "health".to_string()];
        question.attachments = vec![Attachment {
            media_type: MediaType::Image,
            url: "https://img.example/1.png".to_string(),
            thumbnail: None,
        }];

        let created = tokio_test::assert_ok!(service.ask_question(question).await);

        assert_eq!(created.title, "Teething fever?");
        assert_eq!(created.tags, vec!["baby", "health"]);
        assert_eq!(created.attachments.len(), 1);
    }

    #[tokio::test]
    async fn ask_question_rejects_blank_title() {
        let (service, _) = create_service();

        let result = service.ask_question(new_question("   ")).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn ask_question_rejects_too_many_tags() {
        let (service, _) = create_service();
        let mut question = new_question("Daycare or nanny?");
        question.tags = (0..=MAX_TAGS).map(|i| format!("tag{}", i)).collect();

        tokio_test::assert_err!(service.ask_question(question).await);
    }

    #[tokio::test]
    async fn submitted_article_is_pending_until_published() {
        let (service, _) = create_service();

        let article = service
            .submit_article(new_article("  First foods "))
            .await
            .unwrap();
        assert_eq!(article.title, "First foods");
        assert_eq!(article.publication_status, PublicationStatus::Pending);

        let published = service.publish_article(&article.id).await.unwrap();
        assert_eq!(published.publication_status, PublicationStatus::Published);
    }

    #[tokio::test]
    async fn submit_article_requires_content() {
        let (service, _) = create_service();
        let article = NewArticle {
            content: "\n ".to_string(),
            ..new_article("Bedtime routines")
        };

        let result = service.submit_article(article).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(msg))) if msg.contains("content")
        ));
    }

    #[tokio::test]
    async fn overlong_title_is_rejected() {
        let (service, _) = create_service();

        let longest = new_question(&"a".repeat(MAX_TITLE_LEN));
        tokio_test::assert_ok!(service.ask_question(longest).await);
        tokio_test::assert_err!(
            service
                .ask_question(new_question(&"a".repeat(MAX_TITLE_LEN + 1)))
                .await
        );
    }

    #[tokio::test]
    async fn answer_shows_up_in_thread() {
        let (service, _) = create_service();

        service
            .answer_question("q1", new_reply("Keep them hydrated"))
            .await
            .unwrap();
        let thread = service.question_thread("q1").await.unwrap();

        assert_eq!(thread.question.answer_count, 1);
        assert_eq!(thread.answers.len(), 1);
    }

    #[tokio::test]
    async fn blank_reply_is_rejected() {
        let (service, store) = create_service();

        let result = service.comment_on_article("a1", new_reply("  ")).await;

        assert!(result.is_err());
        let article = store.find_article("a1").await.unwrap().unwrap();
        assert_eq!(article.comment_count, 0);
    }

    #[tokio::test]
    async fn missing_thread_is_not_found() {
        let (service, _) = create_service();

        let result = service.article_thread("nope").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
