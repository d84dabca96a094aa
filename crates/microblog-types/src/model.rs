use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{PostId, UserId};

/// A registered user. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub created: DateTime<Utc>,
}

/// A post and the users who liked it, in the order their likes were applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: UserId,
    pub content: String,
    pub likes: Vec<UserId>,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a post with an empty liker set.
    pub fn new(id: PostId, author: UserId, content: String, created: DateTime<Utc>) -> Self {
        Self {
            id,
            author,
            content,
            likes: Vec::new(),
            created,
        }
    }

    pub fn is_liked_by(&self, user: &UserId) -> bool {
        self.likes.contains(user)
    }

    /// Append `user` to the liker set.
    ///
    /// Returns `false` and leaves the set untouched if `user` already liked
    /// this post.
    pub fn add_like(&mut self, user: UserId) -> bool {
        if self.is_liked_by(&user) {
            return false;
        }
        self.likes.push(user);
        true
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// Snapshot of a post as returned by `GetPosts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: PostId,
    pub author: UserId,
    pub content: String,
    pub likes: Vec<UserId>,
    pub created: DateTime<Utc>,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            author: post.author.clone(),
            content: post.content.clone(),
            likes: post.likes.clone(),
            created: post.created,
        }
    }
}
