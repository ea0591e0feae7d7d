//! Post Record Module
//!
//! Defines the persisted post record and the set of caller-writable changes.

use chrono::{DateTime, Utc};

// == Post ==
/// A persisted post record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Server-assigned identifier, immutable after creation
    pub id: u64,
    /// Post title
    pub title: String,
    /// Post body text
    pub description: String,
    /// Identifier of the owning author
    pub author_id: u64,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Time of the last successful update
    pub updated_at: DateTime<Utc>,
}

impl Post {
    // == Constructor ==
    /// Creates a new post record stamped with the current time.
    pub fn new(id: u64, title: String, description: String, author_id: u64) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    // == Merge ==
    /// Returns the `(title, description)` pair this post would hold after
    /// applying `changes`. Absent fields keep their current value.
    pub fn merged(&self, changes: &PostChanges) -> (String, String) {
        (
            changes.title.clone().unwrap_or_else(|| self.title.clone()),
            changes
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
        )
    }
}

// == Post Changes ==
/// The only fields a caller may write on a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}
