//! Feed renderer
//!
//! Renders feeds to a plain-text markdown format for terminals and
//! text-only clients.

use crate::app::{ArticleThread, Feed, QaHub, QuestionThread};
use crate::domain::entities::{ContentItem, FeedEntry, Reply};

/// Render the home feed
pub fn render_feed(feed: &Feed) -> String {
    let mut buf = String::new();

    buf.push_str("# Nestfeed\n\n");
    buf.push_str(&format!(
        "Showing: {} | Sorted by: {}\n\n",
        feed.type_filter, feed.sort_mode
    ));

    if feed.entries.is_empty() {
        buf.push_str("_Nothing here yet. Ask the first question!_\n\n");
    } else {
        for (i, entry) in feed.entries.iter().enumerate() {
            buf.push_str(&render_entry(i + 1, entry));
            buf.push('\n');
        }
    }

    buf.push_str("---\n\n");
    buf.push_str("Filters: `type=all|question|article`, `sort=newest|trending`\n");

    buf
}

/// Render the top-viewed widget
pub fn render_top_viewed(entries: &[FeedEntry]) -> String {
    let mut buf = String::new();
    buf.push_str("## Most Viewed\n\n");

    if entries.is_empty() {
        buf.push_str("_No views yet._\n");
        return buf;
    }

    for (i, entry) in entries.iter().enumerate() {
        buf.push_str(&format!(
            "{}. {} ({} views)\n",
            i + 1,
            truncate(entry.item.title(), 60),
            entry.item.view_count()
        ));
    }

    buf
}

/// Render the Q&A hub listing
pub fn render_qa_hub(hub: &QaHub) -> String {
    let mut buf = String::new();
    match &hub.category {
        Some(category) => {
            buf.push_str(&format!("# Q&A ({}, category {})\n\n", hub.sort, category))
        }
        None => buf.push_str(&format!("# Q&A ({})\n\n", hub.sort)),
    }

    if hub.entries.is_empty() {
        buf.push_str("_No questions match._\n");
        return buf;
    }

    for (i, entry) in hub.entries.iter().enumerate() {
        buf.push_str(&render_entry(i + 1, entry));
        buf.push('\n');
    }

    buf
}

/// Render a question with its answers
pub fn render_question_thread(thread: &QuestionThread) -> String {
    let q = &thread.question;
    let mut buf = String::new();

    buf.push_str(&format!("# {}\n\n", q.title));
    buf.push_str(&format!("{}\n\n", q.body));
    if !q.tags.is_empty() {
        let tags: Vec<String> = q.tags.iter().map(|t| format!("#{}", t)).collect();
        buf.push_str(&format!("{}\n\n", tags.join(" ")));
    }
    buf.push_str(&format!(
        "- **Votes:** {} | **Views:** {} | **Asked:** {}\n\n",
        q.vote_count, q.view_count, q.created_at
    ));

    buf.push_str(&format!("## Answers ({})\n\n", thread.answers.len()));
    buf.push_str(&render_replies(&thread.answers));

    buf
}

/// Render an article with its comments
pub fn render_article_thread(thread: &ArticleThread) -> String {
    let a = &thread.article;
    let mut buf = String::new();

    buf.push_str(&format!("# {}\n\n", a.title));
    if !a.is_published() {
        buf.push_str("_Pending moderation._\n\n");
    }
    buf.push_str(&format!("_{}_\n\n", a.excerpt));
    buf.push_str(&format!("{}\n\n", a.content));
    buf.push_str(&format!(
        "- **Likes:** {} | **Views:** {} | **Published:** {}\n\n",
        a.like_count, a.view_count, a.created_at
    ));

    buf.push_str(&format!("## Comments ({})\n\n", thread.comments.len()));
    buf.push_str(&render_replies(&thread.comments));

    buf
}

fn render_replies(replies: &[Reply]) -> String {
    if replies.is_empty() {
        return "_None yet._\n".to_string();
    }

    replies
        .iter()
        .map(|r| format!("- {} ({}): {}\n", r.author_ref, r.created_at, r.body))
        .collect()
}

fn render_entry(index: usize, entry: &FeedEntry) -> String {
    let badge = if entry.hot { " [HOT]" } else { "" };

    let (label, stats) = match &entry.item {
        ContentItem::Question(q) => (
            "Q",
            format!(
                "{} votes | {} answers | {} views",
                q.vote_count, q.answer_count, q.view_count
            ),
        ),
        ContentItem::Article(a) => (
            "Blog",
            format!(
                "{} likes | {} comments | {} views",
                a.like_count, a.comment_count, a.view_count
            ),
        ),
    };

    let category = entry
        .item
        .category_id()
        .map(|c| format!(" | category {}", c))
        .unwrap_or_default();

    format!(
        "[{}] ({}) {}{}\n    {} | score {:.2}{} | {}/{}\n",
        index,
        label,
        truncate(entry.item.title(), 80),
        badge,
        stats,
        entry.score,
        category,
        entry.kind(),
        entry.id()
    )
}

/// Truncate a string with ellipsis, on character boundaries
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
