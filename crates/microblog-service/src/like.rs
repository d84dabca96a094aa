use std::sync::Arc;

use async_trait::async_trait;
use microblog_events::EventLog;
use microblog_pipeline::Handler;
use microblog_store::Store;
use microblog_types::{EventCategory, LikeRequest};
use tracing::{debug, warn};

use crate::error::{ServiceError, ServiceResult};

/// Like pipeline handler: applies validated likes to the store.
///
/// Failures here are never seen by the caller of `like_post`, who was told
/// the like was accepted; the worker logs them instead.
pub struct LikeApplier {
    store: Arc<Store>,
    events: Arc<EventLog>,
}

impl LikeApplier {
    pub fn new(store: Arc<Store>, events: Arc<EventLog>) -> Self {
        Self { store, events }
    }

    /// Apply one like inside a single exclusive section.
    ///
    /// The duplicate check is repeated here; a pair that passed validation
    /// twice before either copy was applied is rejected the second time.
    pub async fn apply(&self, like: &LikeRequest) -> ServiceResult<()> {
        let mut state = self.store.write().await;
        state.add_like(&like.post_id, &like.user_id)?;

        // Queued before the write section ends, after the mutation succeeded.
        if let Err(err) = self
            .events
            .record(
                EventCategory::Like,
                format!("user {} liked post {}", like.user_id, like.post_id),
            )
            .await
        {
            warn!(post = %like.post_id, user = %like.user_id, error = %err, "like event dropped");
        }
        drop(state);

        debug!(post = %like.post_id, user = %like.user_id, "like applied");
        Ok(())
    }
}

#[async_trait]
impl Handler<LikeRequest> for LikeApplier {
    type Error = ServiceError;

    async fn handle(&mut self, like: LikeRequest) -> ServiceResult<()> {
        self.apply(&like).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use microblog_events::EventLogConfig;
    use microblog_types::{PostId, UserId};

    struct Fixture {
        _dir: tempfile::TempDir,
        store: Arc<Store>,
        events: Arc<EventLog>,
        post: PostId,
    }

    async fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let mut config = EventLogConfig::at(dir.path().join("events.log"));
        config.mirror_stdout = false;
        let events = Arc::new(EventLog::start(&config));

        let store = Arc::new(Store::new());
        let post = {
            let mut state = store.write().await;
            let alice = state.insert_user("alice", Utc::now()).unwrap();
            state.insert_user("bob", Utc::now()).unwrap();
            state.insert_post(&alice.id, "hello", Utc::now()).unwrap().id
        };

        Fixture {
            _dir: dir,
            store,
            events,
            post,
        }
    }

    #[tokio::test]
    async fn applies_like_and_records_event() {
        let f = fixture().await;
        let applier = LikeApplier::new(Arc::clone(&f.store), Arc::clone(&f.events));

        applier
            .apply(&LikeRequest::new(f.post.clone(), UserId::from_ordinal(2)))
            .await
            .unwrap();

        let state = f.store.read().await;
        assert_eq!(
            state.post(f.post.as_str()).unwrap().likes,
            vec![UserId::from_ordinal(2)]
        );
        drop(state);

        f.events.close().await.unwrap();
        let log = std::fs::read_to_string(f.events.path()).unwrap();
        assert!(log.contains("LIKE: user user_2 liked post post_1"));
    }

    #[tokio::test]
    async fn duplicate_accepted_like_is_applied_once() {
        let f = fixture().await;
        let applier = LikeApplier::new(Arc::clone(&f.store), Arc::clone(&f.events));
        let like = LikeRequest::new(f.post.clone(), UserId::from_ordinal(2));

        applier.apply(&like).await.unwrap();
        let err = applier.apply(&like).await.unwrap_err();
        assert_eq!(err, ServiceError::conflict("post already liked"));

        let state = f.store.read().await;
        assert_eq!(state.post(f.post.as_str()).unwrap().like_count(), 1);
    }

    #[tokio::test]
    async fn missing_post_is_reported_to_the_worker_only() {
        let f = fixture().await;
        let applier = LikeApplier::new(Arc::clone(&f.store), Arc::clone(&f.events));

        let err = applier
            .apply(&LikeRequest::new("post_404", "user_2"))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("post not found"));
    }
}
