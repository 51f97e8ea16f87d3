//! # Axum Helpers
//!
//! A small collection of utilities for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: the structured `{"error": {...}}` response body
//! - **[`extractors`]**: custom extractors (validated JSON)
//! - **[`server`]**: server bootstrap, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::{ErrorBody, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export server types
pub use server::{HealthResponse, create_app, health_router, shutdown_signal};
