//! API Module
//!
//! HTTP handlers and routing for the posts REST API.
//!
//! # Endpoints
//! - `GET /posts` - List posts
//! - `POST /posts` - Create a post
//! - `GET /posts/new` - Blank post template
//! - `GET /posts/:id` - Show a post
//! - `PATCH|PUT /posts/:id` - Update a post
//! - `GET /posts/:id/edit` - Post for form pre-fill
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
