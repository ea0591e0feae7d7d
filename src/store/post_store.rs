//! Post Store Module
//!
//! Record tables for posts and authors with server-assigned identifiers.
//! Every write is validated and reports its outcome through `Result`.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::store::{Author, Post, PostChanges, DEFAULT_AUTHOR_ID};

// == Post Store ==
/// In-memory persistence for posts and authors.
#[derive(Debug)]
pub struct PostStore {
    /// Post records keyed by id
    posts: BTreeMap<u64, Post>,
    /// Author records keyed by id
    authors: BTreeMap<u64, Author>,
    /// Next id handed out to a created post
    next_post_id: u64,
    /// Maximum title length in characters
    max_title_length: usize,
    /// Maximum description length in characters
    max_description_length: usize,
}

impl PostStore {
    // == Constructor ==
    /// Creates an empty store seeded with the default author.
    ///
    /// # Arguments
    /// * `default_author_name` - Name of the author credited with new posts
    /// * `max_title_length` - Title length limit in characters
    /// * `max_description_length` - Description length limit in characters
    pub fn new(
        default_author_name: impl Into<String>,
        max_title_length: usize,
        max_description_length: usize,
    ) -> Self {
        let mut authors = BTreeMap::new();
        authors.insert(
            DEFAULT_AUTHOR_ID,
            Author::new(DEFAULT_AUTHOR_ID, default_author_name),
        );

        Self {
            posts: BTreeMap::new(),
            authors,
            next_post_id: 1,
            max_title_length,
            max_description_length,
        }
    }

    /// Creates a store from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.default_author_name.clone(),
            config.max_title_length,
            config.max_description_length,
        )
    }

    // == Find All ==
    /// Returns every post in ascending id order.
    pub fn all(&self) -> Vec<&Post> {
        self.posts.values().collect()
    }

    // == Find ==
    /// Looks up a post by id.
    pub fn find(&self, id: u64) -> Result<&Post> {
        self.posts
            .get(&id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    // == Author Lookup ==
    /// Looks up an author by id.
    pub fn author(&self, id: u64) -> Option<&Author> {
        self.authors.get(&id)
    }

    // == Create ==
    /// Validates and persists a new post credited to the default author.
    ///
    /// Nothing is stored and no id is consumed when validation fails.
    pub fn create(&mut self, changes: PostChanges) -> Result<&Post> {
        let title = changes.title.unwrap_or_default();
        let description = changes.description.unwrap_or_default();
        self.validate(&title, &description)?;

        let id = self.next_post_id;
        self.next_post_id += 1;
        debug!(post_id = id, "Creating post");

        let post: &Post = self
            .posts
            .entry(id)
            .or_insert(Post::new(id, title, description, DEFAULT_AUTHOR_ID));
        Ok(post)
    }

    // == Update ==
    /// Applies a partial update to an existing post.
    ///
    /// The record is left untouched when validation fails.
    pub fn update(&mut self, id: u64, changes: PostChanges) -> Result<&Post> {
        let (title, description) = self.find(id)?.merged(&changes);
        self.validate(&title, &description)?;

        let post = self
            .posts
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;

        if !changes.is_empty() {
            debug!(post_id = id, "Updating post");
            post.title = title;
            post.description = description;
            post.updated_at = chrono::Utc::now();
        }
        Ok(&*post)
    }

    // == Validation ==
    fn validate(&self, title: &str, description: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(ApiError::Validation("Title can't be blank".to_string()));
        }
        if title.chars().count() > self.max_title_length {
            return Err(ApiError::Validation(format!(
                "Title is too long (maximum is {} characters)",
                self.max_title_length
            )));
        }
        if description.chars().count() > self.max_description_length {
            return Err(ApiError::Validation(format!(
                "Description is too long (maximum is {} characters)",
                self.max_description_length
            )));
        }
        Ok(())
    }

    // == Length ==
    /// Returns the number of stored posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    // == Is Empty ==
    /// Returns true if no posts are stored.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
