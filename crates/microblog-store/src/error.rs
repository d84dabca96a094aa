use microblog_types::{PostId, UserId};

/// Invariant violations rejected by [`StoreState`](crate::StoreState).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("username already exists: {username}")]
    DuplicateUsername { username: String },

    #[error("user not found: {id}")]
    UnknownUser { id: UserId },

    #[error("post not found: {id}")]
    UnknownPost { id: PostId },

    #[error("{user} already liked {post}")]
    DuplicateLike { post: PostId, user: UserId },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
