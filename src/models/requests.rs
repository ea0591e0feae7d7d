//! Request DTOs for the posts API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Deserializer};

use crate::error::{ApiError, Result};
use crate::store::PostChanges;

/// Request body for Create (POST /posts) and Update (PATCH/PUT /posts/:id)
///
/// The `post` key is required; a body without it is rejected by the
/// `Json` extractor before any handler runs.
#[derive(Debug, Clone, Deserialize)]
pub struct PostPayload {
    pub post: PostParams,
}

impl PostPayload {
    /// Extracts the permitted changes, rejecting a `post` object that
    /// carries none of them.
    pub fn into_changes(self) -> Result<PostChanges> {
        if self.post.is_empty() {
            return Err(ApiError::InvalidRequest(
                "param is missing or the value is empty: post".to_string(),
            ));
        }
        Ok(self.post.into())
    }
}

/// The permitted post fields.
///
/// Only `title` and `description` are read. Any other key, including `id`
/// or `author`, is dropped during deserialization. The outer `Option` is
/// `None` when the key is absent; an explicit `null` is `Some(None)`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostParams {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

impl PostParams {
    /// Returns true if no permitted key was supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

// An explicit null becomes an empty string and goes through validation.
impl From<PostParams> for PostChanges {
    fn from(params: PostParams) -> Self {
        Self {
            title: params.title.map(Option::unwrap_or_default),
            description: params.description.map(Option::unwrap_or_default),
        }
    }
}
