//! Store Module
//!
//! In-memory record store holding posts and their authors.

mod author;
mod post;
mod post_store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use author::Author;
pub use post::{Post, PostChanges};
pub use post_store::PostStore;

// == Public Constants ==
/// Identifier of the author seeded when a store is created
pub const DEFAULT_AUTHOR_ID: u64 = 1;
