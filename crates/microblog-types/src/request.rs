//! Plain request and response values exchanged with the service layer.
//!
//! Field names match the JSON bodies of the HTTP API.

use serde::{Deserialize, Serialize};

use crate::id::{PostId, UserId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: UserId,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default = "empty_user")]
    pub author: UserId,
    #[serde(default)]
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub id: PostId,
    pub author: UserId,
    pub content: String,
}

/// A like request; once validated it is also the Like Pipeline work item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LikeRequest {
    pub post_id: PostId,
    pub user_id: UserId,
}

impl LikeRequest {
    pub fn new(post_id: impl Into<PostId>, user_id: impl Into<UserId>) -> Self {
        Self {
            post_id: post_id.into(),
            user_id: user_id.into(),
        }
    }
}

fn empty_user() -> UserId {
    UserId::new("")
}
