//! Foundation types for the microblog store.
//!
//! Every other microblog crate depends on `microblog-types`. Nothing here
//! holds a lock or spawns a task; these are the plain values that flow
//! between the store, the pipelines, and the HTTP adapter.
//!
//! # Key Types
//!
//! - [`UserId`] / [`PostId`]: identities derived from monotonic ordinals
//! - [`User`] / [`Post`]: records owned by the store
//! - [`PostView`]: read-only snapshot of a post returned by queries
//! - [`EventRecord`]: audit record consumed by the event log

pub mod event;
pub mod id;
pub mod model;
pub mod request;

pub use event::{EventCategory, EventRecord};
pub use id::{PostId, UserId};
pub use model::{Post, PostView, User};
pub use request::{
    CreatePostRequest, CreatePostResponse, LikeRequest, RegisterRequest, RegisterResponse,
};
