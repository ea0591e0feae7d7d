//! API Handlers
//!
//! HTTP request handlers for each posts endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, NewPostResponse, PostPayload, PostResponse};
use crate::store::{Post, PostStore};

/// Application state shared across all handlers.
///
/// Contains the post store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Shared record store
    pub store: Arc<RwLock<PostStore>>,
}

impl AppState {
    /// Creates a new AppState with the given store.
    pub fn new(store: PostStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(PostStore::from_config(config))
    }
}

// == Shared Lookup ==
/// Resolves a raw path identifier to a stored post.
///
/// Identifiers that do not parse are treated the same as unknown ones.
fn find_post<'a>(store: &'a PostStore, raw_id: &str) -> Result<&'a Post> {
    raw_id
        .parse::<u64>()
        .map_err(|_| ApiError::NotFound(raw_id.to_string()))
        .and_then(|id| store.find(id))
}

fn render(store: &PostStore, post: &Post) -> PostResponse {
    PostResponse::new(post, store.author(post.author_id))
}

/// Handler for GET /posts
///
/// Returns every post with its author embedded.
pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<PostResponse>> {
    let store = state.store.read().await;
    let posts = store.all().into_iter().map(|p| render(&store, p)).collect();

    Json(posts)
}

/// Handler for GET /posts/:id
pub async fn show_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>> {
    let store = state.store.read().await;
    let post = find_post(&store, &id)?;

    Ok(Json(render(&store, post)))
}

/// Handler for GET /posts/new
///
/// Returns a blank post template for form-rendering clients.
pub async fn new_handler() -> Json<NewPostResponse> {
    Json(NewPostResponse::default())
}

/// Handler for POST /posts
///
/// Persists a new post from the permitted fields and returns it with 201.
pub async fn create_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PostPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<PostResponse>)> {
    let Json(payload) = payload?;
    let changes = payload.into_changes()?;

    let mut store = state.store.write().await;
    let id = store
        .create(changes)
        .map_err(|e| {
            warn!("Rejected post create: {}", e);
            e
        })?
        .id;
    info!(post_id = id, "Post created");

    let response = render(&store, store.find(id)?);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET /posts/:id/edit
///
/// Returns the located post for form pre-fill.
pub async fn edit_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>> {
    let store = state.store.read().await;
    let post = find_post(&store, &id)?;

    Ok(Json(render(&store, post)))
}

/// Handler for PATCH/PUT /posts/:id
///
/// Applies a partial update and returns the post with 202.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<PostPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<PostResponse>)> {
    let Json(payload) = payload?;

    let mut store = state.store.write().await;
    let id = find_post(&store, &id)?.id;
    let changes = payload.into_changes()?;

    store.update(id, changes).map_err(|e| {
        warn!(post_id = id, "Rejected post update: {}", e);
        e
    })?;
    info!(post_id = id, "Post updated");

    let response = render(&store, store.find(id)?);
    Ok((StatusCode::ACCEPTED, Json(response)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
