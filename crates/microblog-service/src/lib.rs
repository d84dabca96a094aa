//! Microblog operations.
//!
//! [`Service`] is the contract the HTTP layer calls into. It owns the
//! [`Store`](microblog_store::Store), the like pipeline, and the event log,
//! and exposes four operations:
//!
//! - [`Service::register`]: create a user with a unique display name
//! - [`Service::create_post`]: append a post by an existing user
//! - [`Service::get_posts`]: snapshot every post in creation order
//! - [`Service::like_post`]: validate a like and queue it for application
//!
//! # Likes are accepted, then applied
//!
//! `like_post` checks its preconditions under a shared section and hands the
//! request to the like pipeline. A successful return means the like was
//! valid when it was checked, not that it is already visible. The pipeline
//! worker applies likes one at a time in queue order and checks again for a
//! duplicate inside its exclusive section, so two concurrently accepted
//! likes for the same (post, user) pair leave exactly one entry.
//!
//! # Events
//!
//! Successful registrations and posts, and every applied like, are queued on
//! the event log. The event log and the like pipeline are independent
//! queues; there is no ordering between them beyond what is stated above.

pub mod config;
pub mod error;
pub mod like;
pub mod service;

pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use like::LikeApplier;
pub use service::{CloseSummary, Service};
