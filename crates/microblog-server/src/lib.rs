//! HTTP adapter for the microblog service.
//!
//! Maps JSON requests onto [`microblog_service::Service`] and service errors
//! onto status codes: validation 400, not found 404, conflict 409, closed
//! service 503. Error bodies are the bare message as plain text.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use server::MicroblogServer;
