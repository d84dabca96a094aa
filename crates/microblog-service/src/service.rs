use std::sync::Arc;

use chrono::Utc;
use microblog_events::EventLog;
use microblog_pipeline::{Pipeline, PipelineConfig};
use microblog_store::{Store, StoreError};
use microblog_types::{
    CreatePostRequest, CreatePostResponse, EventCategory, LikeRequest, PostView, RegisterRequest,
    RegisterResponse,
};
use tracing::{debug, info, warn};

use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::like::LikeApplier;

/// Counts reported by [`Service::close`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CloseSummary {
    /// Like requests the like worker handled (applied or rejected).
    pub likes_processed: u64,
    /// Records the event log worker handled.
    pub events_written: u64,
}

/// The microblog service: store, like pipeline, and event log.
///
/// Construct inside a tokio runtime; both workers are spawned immediately.
/// Share it behind an `Arc` and call [`Service::close`] once on shutdown.
pub struct Service {
    store: Arc<Store>,
    events: Arc<EventLog>,
    likes: Pipeline<LikeRequest>,
}

impl Service {
    pub fn new(config: &ServiceConfig) -> Self {
        let events = Arc::new(EventLog::start(&config.events));
        Self::with_event_log(config, events)
    }

    /// Build a service around an already started event log.
    pub fn with_event_log(config: &ServiceConfig, events: Arc<EventLog>) -> Self {
        let store = Arc::new(Store::new());
        let likes = Pipeline::spawn(
            PipelineConfig::new("likes", config.like_queue_capacity),
            LikeApplier::new(Arc::clone(&store), Arc::clone(&events)),
        );

        info!(
            pipeline = likes.name(),
            like_queue_capacity = likes.capacity(),
            event_log = %events.path().display(),
            "service started"
        );

        Self {
            store,
            events,
            likes,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Register a new user under a unique display name.
    pub async fn register(&self, req: RegisterRequest) -> ServiceResult<RegisterResponse> {
        if req.username.is_empty() {
            return Err(ServiceError::validation("username is required"));
        }

        let user = {
            let mut state = self.store.write().await;
            state.insert_user(&req.username, Utc::now())?
        };

        debug!(id = %user.id, username = %user.username, "user registered");
        self.emit(
            EventCategory::Register,
            format!("user {} registered as {}", user.username, user.id),
        )
        .await;

        Ok(RegisterResponse {
            id: user.id,
            username: user.username,
        })
    }

    /// Create a post by an existing user.
    ///
    /// The author check runs under a shared section and the insert under a
    /// separate exclusive one. Users are never removed, so the author cannot
    /// disappear in between; the insert re-checks regardless.
    pub async fn create_post(&self, req: CreatePostRequest) -> ServiceResult<CreatePostResponse> {
        if req.author.is_empty() {
            return Err(ServiceError::validation("author is required"));
        }
        if req.content.is_empty() {
            return Err(ServiceError::validation("content is required"));
        }

        if !self.store.read().await.contains_user(req.author.as_str()) {
            return Err(ServiceError::not_found("author not found"));
        }

        let post = {
            let mut state = self.store.write().await;
            state
                .insert_post(&req.author, &req.content, Utc::now())
                .map_err(|err| match err {
                    StoreError::UnknownUser { .. } => ServiceError::not_found("author not found"),
                    other => other.into(),
                })?
        };

        debug!(id = %post.id, author = %post.author, "post created");
        self.emit(
            EventCategory::PostCreated,
            format!("post {} created by {}", post.id, post.author),
        )
        .await;

        Ok(CreatePostResponse {
            id: post.id,
            author: post.author,
            content: post.content,
        })
    }

    /// Every post in creation order, with likes applied so far.
    pub async fn get_posts(&self) -> Vec<PostView> {
        self.store.snapshot().await
    }

    /// Validate a like and queue it for application.
    ///
    /// `Ok(())` means the like was valid when checked and has been queued.
    /// It becomes visible in [`Service::get_posts`] once the like worker has
    /// applied it; see [`Service::flush`].
    pub async fn like_post(&self, req: LikeRequest) -> ServiceResult<()> {
        if req.post_id.is_empty() {
            return Err(ServiceError::validation("post_id is required"));
        }
        if req.user_id.is_empty() {
            return Err(ServiceError::validation("user_id is required"));
        }

        {
            let state = self.store.read().await;
            if !state.contains_user(req.user_id.as_str()) {
                return Err(ServiceError::not_found("user not found"));
            }
            let post = state
                .post(req.post_id.as_str())
                .ok_or_else(|| ServiceError::not_found("post not found"))?;
            if post.is_liked_by(&req.user_id) {
                return Err(ServiceError::conflict("post already liked"));
            }
        }

        debug!(post = %req.post_id, user = %req.user_id, "like accepted");
        self.likes
            .submit(req)
            .await
            .map_err(|err| ServiceError::Unavailable(err.to_string()))
    }

    /// Wait until every like accepted so far has been applied and every
    /// event queued so far (including those likes' events) has been written.
    pub async fn flush(&self) -> ServiceResult<()> {
        self.likes
            .flush()
            .await
            .map_err(|err| ServiceError::Unavailable(err.to_string()))?;
        self.events
            .flush()
            .await
            .map_err(|err| ServiceError::Unavailable(err.to_string()))
    }

    /// Drain and stop both workers. Later calls report zero counts.
    ///
    /// The like pipeline closes first so that events for the likes it drains
    /// still reach the event log. Everything already queued is processed
    /// before this returns. The store stays readable afterwards.
    pub async fn close(&self) -> ServiceResult<CloseSummary> {
        let likes_processed = self
            .likes
            .close()
            .await
            .map_err(|err| ServiceError::Unavailable(err.to_string()))?;
        let events_written = self
            .events
            .close()
            .await
            .map_err(|err| ServiceError::Unavailable(err.to_string()))?;

        info!(likes_processed, events_written, "service closed");
        Ok(CloseSummary {
            likes_processed,
            events_written,
        })
    }

    async fn emit(&self, category: EventCategory, message: String) {
        if let Err(err) = self.events.record(category, message).await {
            warn!(%category, error = %err, "event dropped");
        }
    }
}
