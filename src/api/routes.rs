//! API Routes
//!
//! Configures the Axum router with all posts endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_handler, edit_handler, health_handler, list_handler, new_handler, show_handler,
    update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /posts` - List posts
/// - `POST /posts` - Create a post
/// - `GET /posts/new` - Blank post template
/// - `GET /posts/:id` - Show a post
/// - `PATCH|PUT /posts/:id` - Update a post
/// - `GET /posts/:id/edit` - Post for form pre-fill
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // `/posts/new` is a static segment and takes priority over `/posts/:id`
    Router::new()
        .route("/posts", get(list_handler).post(create_handler))
        .route("/posts/new", get(new_handler))
        .route(
            "/posts/:id",
            get(show_handler)
                .patch(update_handler)
                .put(update_handler),
        )
        .route("/posts/:id/edit", get(edit_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
