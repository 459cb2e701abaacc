//! Test utilities
//!
//! Test fixtures shared by unit tests and the HTTP integration tests.
//! The in-memory content store doubles as the test store, so no separate
//! mock implementations of the port are needed.

pub mod fixtures;

pub use fixtures::*;
