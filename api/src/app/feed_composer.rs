//! Feed composer
//!
//! Turns a snapshot of questions and articles into the ranked home feed.
//! Everything here is a pure function of its arguments: no I/O, no shared
//! state, inputs are only borrowed. Callers re-invoke it whenever the
//! content snapshot or the selected filter/sort changes.
//!
//! Score = primary + secondary * 2 + views / 100, where primary is votes
//! (questions) or likes (articles) and secondary is answers or comments.

use std::cmp::Ordering;

use crate::domain::entities::{
    Article, ContentItem, FeedEntry, Question, QuestionSort, SortMode, TypeFilter,
};

/// Weight of an answer or comment relative to a vote or like
pub const SECONDARY_WEIGHT: f64 = 2.0;

/// Views are divided by this before being added to the score
pub const VIEW_DIVISOR: f64 = 100.0;

/// Entries scoring strictly above this are marked hot in trending order
pub const HOT_SCORE_THRESHOLD: f64 = 20.0;

/// Size of the top-viewed widget when the caller does not ask for one
pub const DEFAULT_TOP_VIEWED: usize = 5;

/// Largest top-viewed widget a client or the configuration may ask for
pub const MAX_TOP_VIEWED: usize = 50;

/// Engagement score of a single item.
///
/// View division is real-valued so views stay a fractional tie-breaker.
pub fn engagement_score(item: &ContentItem) -> f64 {
    item.primary_count() as f64
        + item.secondary_count() as f64 * SECONDARY_WEIGHT
        + item.view_count() as f64 / VIEW_DIVISOR
}

/// Hot badge predicate. Only trending order ever shows the badge.
pub fn is_hot(score: f64, sort_mode: SortMode) -> bool {
    sort_mode == SortMode::Trending && score > HOT_SCORE_THRESHOLD
}

/// Compose the home feed.
///
/// Unpublished articles are always dropped, even if the caller already
/// filtered them. Both orderings are stable: equal keys keep the order of
/// the combined input (questions first, then articles).
pub fn compose_feed(
    questions: &[Question],
    articles: &[Article],
    type_filter: TypeFilter,
    sort_mode: SortMode,
) -> Vec<FeedEntry> {
    let mut entries: Vec<FeedEntry> = eligible_entries(questions, articles)
        .filter(|entry| type_filter.matches(entry.kind()))
        .collect();

    match sort_mode {
        SortMode::Trending => entries.sort_by(by_score_desc),
        SortMode::Newest => entries.sort_by(by_created_at_desc),
    }

    for entry in &mut entries {
        entry.hot = is_hot(entry.score, sort_mode);
    }

    entries
}

/// The `n` most viewed feed-eligible items, regardless of kind
pub fn top_viewed(questions: &[Question], articles: &[Article], n: usize) -> Vec<FeedEntry> {
    let mut entries: Vec<FeedEntry> = eligible_entries(questions, articles).collect();
    entries.sort_by(|a, b| b.item.view_count().cmp(&a.item.view_count()));
    entries.truncate(n);
    entries
}

/// Question-only listing for the Q&A hub, optionally narrowed to one category
pub fn compose_qa_hub(
    questions: &[Question],
    sort: QuestionSort,
    category: Option<&str>,
) -> Vec<FeedEntry> {
    let mut entries: Vec<FeedEntry> = questions
        .iter()
        .filter(|q| category.map_or(true, |c| q.category_id.as_deref() == Some(c)))
        .cloned()
        .map(|q| to_entry(ContentItem::Question(q)))
        .collect();

    match sort {
        QuestionSort::Newest => entries.sort_by(by_created_at_desc),
        QuestionSort::Hot => {
            entries.sort_by(|a, b| b.item.primary_count().cmp(&a.item.primary_count()))
        }
        QuestionSort::Unanswered => entries.retain(|e| e.item.secondary_count() == 0),
    }

    entries
}

fn eligible_entries<'a>(
    questions: &'a [Question],
    articles: &'a [Article],
) -> impl Iterator<Item = FeedEntry> + 'a {
    let questions = questions
        .iter()
        .cloned()
        .map(|q| to_entry(ContentItem::Question(q)));
    let articles = articles
        .iter()
        .filter(|a| a.is_published())
        .cloned()
        .map(|a| to_entry(ContentItem::Article(a)));
    questions.chain(articles)
}

fn to_entry(item: ContentItem) -> FeedEntry {
    let score = engagement_score(&item);
    FeedEntry {
        item,
        score,
        hot: false,
    }
}

fn by_score_desc(a: &FeedEntry, b: &FeedEntry) -> Ordering {
    b.score.total_cmp(&a.score)
}

// ISO-8601 timestamps order lexicographically
fn by_created_at_desc(a: &FeedEntry, b: &FeedEntry) -> Ordering {
    b.item.created_at().cmp(a.item.created_at())
}
