//! Response DTOs for the posts API
//!
//! Serializers for outgoing HTTP response bodies. A post is rendered with
//! exactly `id`, `title`, `description` and a nested `author`.

use serde::Serialize;

use crate::store::{Author, Post};

/// Serialized author embedded in a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorResponse {
    pub id: u64,
    pub name: String,
}

impl From<&Author> for AuthorResponse {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.name.clone(),
        }
    }
}

/// Serialized post, used for single records and arrays alike
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResponse {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// `null` only when the referenced author record is missing
    pub author: Option<AuthorResponse>,
}

impl PostResponse {
    /// Renders a post together with its related author.
    pub fn new(post: &Post, author: Option<&Author>) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            description: post.description.clone(),
            author: author.map(AuthorResponse::from),
        }
    }
}

/// Blank, unsaved post returned by GET /posts/new
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewPostResponse {
    pub title: String,
    pub description: String,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_response_exposes_whitelisted_fields() {
        let post = Post::new(3, "A".into(), "B".into(), 1);
        let author = Author::new(1, "Anonymous");

        let value = serde_json::to_value(PostResponse::new(&post, Some(&author))).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "title": "A",
                "description": "B",
                "author": {"id": 1, "name": "Anonymous"}
            })
        );
    }

    #[test]
    fn test_post_response_missing_author() {
        let post = Post::new(3, "A".into(), "B".into(), 42);

        let value = serde_json::to_value(PostResponse::new(&post, None)).unwrap();
        assert!(value["author"].is_null());
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_new_post_response_is_blank() {
        let value = serde_json::to_value(NewPostResponse::default()).unwrap();
        assert_eq!(value, json!({"title": "", "description": ""}));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
