use microblog_types::PostView;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::trace;

use crate::state::StoreState;

/// The shared store: one [`StoreState`] behind one reader/writer lock.
///
/// The lock is async-aware so a write section may stay open across an
/// `.await` (the like worker keeps it while queueing the matching event).
#[derive(Debug, Default)]
pub struct Store {
    state: RwLock<StoreState>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared access for read-only work.
    pub async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    /// Exclusive access for any mutation.
    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        trace!("store write section requested");
        self.state.write().await
    }

    /// Copy every post, in creation order, under one shared section.
    pub async fn snapshot(&self) -> Vec<PostView> {
        self.read().await.post_views()
    }
}
