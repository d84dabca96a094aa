use std::collections::HashMap;

use chrono::{DateTime, Utc};
use microblog_types::{Post, PostId, PostView, User, UserId};

use crate::error::{StoreError, StoreResult};

/// Everything guarded by the store lock.
///
/// Methods here enforce the data invariants but know nothing about locking;
/// callers reach a `StoreState` only through a [`Store`](crate::Store)
/// guard.
#[derive(Debug, Default)]
pub struct StoreState {
    users: HashMap<UserId, User>,
    usernames: HashMap<String, UserId>,
    posts: Vec<Post>,
    post_index: HashMap<PostId, usize>,
    user_seq: u64,
    post_seq: u64,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Users ----

    pub fn contains_user(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn user_by_name(&self, username: &str) -> Option<&User> {
        self.usernames.get(username).and_then(|id| self.users.get(id))
    }

    /// Register `username`, allocating the next user ordinal.
    pub fn insert_user(&mut self, username: &str, created: DateTime<Utc>) -> StoreResult<User> {
        if self.usernames.contains_key(username) {
            return Err(StoreError::DuplicateUsername {
                username: username.to_string(),
            });
        }

        self.user_seq += 1;
        let user = User {
            id: UserId::from_ordinal(self.user_seq),
            username: username.to_string(),
            created,
        };
        self.usernames.insert(user.username.clone(), user.id.clone());
        self.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    // ---- Posts ----

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.post_index.get(id).and_then(|&i| self.posts.get(i))
    }

    pub fn post_mut(&mut self, id: &str) -> Option<&mut Post> {
        let i = *self.post_index.get(id)?;
        self.posts.get_mut(i)
    }

    /// Append a post by `author`, allocating the next post ordinal.
    ///
    /// The author is checked again here so that no post can ever reference
    /// a user that is absent from the map.
    pub fn insert_post(
        &mut self,
        author: &UserId,
        content: &str,
        created: DateTime<Utc>,
    ) -> StoreResult<Post> {
        if !self.contains_user(author.as_str()) {
            return Err(StoreError::UnknownUser { id: author.clone() });
        }

        self.post_seq += 1;
        let post = Post::new(
            PostId::from_ordinal(self.post_seq),
            author.clone(),
            content.to_string(),
            created,
        );
        self.post_index.insert(post.id.clone(), self.posts.len());
        self.posts.push(post.clone());
        Ok(post)
    }

    /// Append `user` to the liker set of `post`.
    pub fn add_like(&mut self, post: &PostId, user: &UserId) -> StoreResult<()> {
        let target = self
            .post_mut(post.as_str())
            .ok_or_else(|| StoreError::UnknownPost { id: post.clone() })?;

        if !target.add_like(user.clone()) {
            return Err(StoreError::DuplicateLike {
                post: post.clone(),
                user: user.clone(),
            });
        }
        Ok(())
    }

    /// Posts in creation order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post_views(&self) -> Vec<PostView> {
        self.posts.iter().map(PostView::from).collect()
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}
