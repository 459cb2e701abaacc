//! Feed domain types
//!
//! Selection criteria for the home feed and the ranked entries it yields.

use serde::Serialize;

use super::{ContentItem, ContentKind};
use crate::error::DomainError;

/// Which kinds of content the home feed shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    #[default]
    All,
    Question,
    Article,
}

impl TypeFilter {
    pub fn matches(self, kind: ContentKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Question => kind == ContentKind::Question,
            TypeFilter::Article => kind == ContentKind::Article,
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Question => write!(f, "question"),
            TypeFilter::Article => write!(f, "article"),
        }
    }
}

impl std::str::FromStr for TypeFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TypeFilter::All),
            "question" => Ok(TypeFilter::Question),
            "article" => Ok(TypeFilter::Article),
            _ => Err(DomainError::InvalidArgument(format!(
                "Unknown type filter: {}. Use: all, question, article",
                s
            ))),
        }
    }
}

/// Ordering of the home feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Newest,
    Trending,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Newest => write!(f, "newest"),
            SortMode::Trending => write!(f, "trending"),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortMode::Newest),
            "trending" => Ok(SortMode::Trending),
            _ => Err(DomainError::InvalidArgument(format!(
                "Unknown sort mode: {}. Use: newest, trending",
                s
            ))),
        }
    }
}

/// Ordering of the question-only Q&A hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSort {
    #[default]
    Newest,
    /// Most votes first
    Hot,
    /// Only questions nobody has answered yet
    Unanswered,
}

impl std::fmt::Display for QuestionSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionSort::Newest => write!(f, "newest"),
            QuestionSort::Hot => write!(f, "hot"),
            QuestionSort::Unanswered => write!(f, "unanswered"),
        }
    }
}

impl std::str::FromStr for QuestionSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(QuestionSort::Newest),
            "hot" => Ok(QuestionSort::Hot),
            "unanswered" => Ok(QuestionSort::Unanswered),
            _ => Err(DomainError::InvalidArgument(format!(
                "Unknown question sort: {}. Use: newest, hot, unanswered",
                s
            ))),
        }
    }
}

/// A content item annotated with its engagement score.
///
/// Derived on every composition; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedEntry {
    #[serde(flatten)]
    pub item: ContentItem,
    pub score: f64,
    pub hot: bool,
}

impl FeedEntry {
    pub fn kind(&self) -> ContentKind {
        self.item.kind()
    }

    pub fn id(&self) -> &str {
        self.item.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_filter_from_str() {
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!(
            "question".parse::<TypeFilter>().unwrap(),
            TypeFilter::Question
        );
        assert_eq!(
            "article".parse::<TypeFilter>().unwrap(),
            TypeFilter::Article
        );
    }

    #[test]
    fn unknown_type_filter_is_invalid_argument() {
        let err = "unknown".parse::<TypeFilter>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn unknown_sort_mode_is_invalid_argument() {
        assert_eq!("trending".parse::<SortMode>().unwrap(), SortMode::Trending);
        let err = "popular".parse::<SortMode>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn question_sort_from_str() {
        assert_eq!(
            "unanswered".parse::<QuestionSort>().unwrap(),
            QuestionSort::Unanswered
        );
        assert!("trending".parse::<QuestionSort>().is_err());
    }

    #[test]
    fn type_filter_matches() {
        assert!(TypeFilter::All.matches(ContentKind::Question));
        assert!(TypeFilter::All.matches(ContentKind::Article));
        assert!(TypeFilter::Question.matches(ContentKind::Question));
        assert!(!TypeFilter::Question.matches(ContentKind::Article));
        assert!(!TypeFilter::Article.matches(ContentKind::Question));
    }
}
