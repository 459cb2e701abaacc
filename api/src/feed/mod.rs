//! Feed module
//!
//! Plain-text rendering of feeds and content threads.

pub mod renderer;

pub use renderer::{
    render_article_thread, render_feed, render_qa_hub, render_question_thread, render_top_viewed,
};
