//! In-memory adapters
//!
//! Process-local implementations of the content store port.

pub mod content_store;

pub use content_store::InMemoryContentStore;
