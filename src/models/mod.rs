//! Request and Response models for the posts API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{PostParams, PostPayload};
pub use responses::{AuthorResponse, HealthResponse, NewPostResponse, PostResponse};
