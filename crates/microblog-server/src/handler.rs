use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use microblog_service::Service;
use microblog_types::{
    CreatePostRequest, CreatePostResponse, LikeRequest, PostView, RegisterRequest,
    RegisterResponse, UserId,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::ApiError;

pub type AppState = Arc<Service>;

/// Body of `POST /posts/:id/like`; the post id comes from the path.
#[derive(Debug, Deserialize)]
pub struct LikeBody {
    #[serde(default = "no_user")]
    pub user_id: UserId,
}

fn no_user() -> UserId {
    UserId::new("")
}

/// Decode a JSON body whatever the request's `Content-Type` says.
fn body<T: DeserializeOwned>(raw: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(raw).map_err(|err| {
        debug!(error = %err, "rejected request body");
        ApiError::InvalidBody
    })
}

pub async fn register(
    State(service): State<AppState>,
    payload: Bytes,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let resp = service.register(body(&payload)?).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

pub async fn create_post(
    State(service): State<AppState>,
    payload: Bytes,
) -> Result<(StatusCode, Json<CreatePostResponse>), ApiError> {
    let resp = service.create_post(body(&payload)?).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

pub async fn get_posts(State(service): State<AppState>) -> Json<Vec<PostView>> {
    Json(service.get_posts().await)
}

/// Accepts the like; it is applied asynchronously.
pub async fn like_post(
    State(service): State<AppState>,
    Path(post_id): Path<String>,
    payload: Bytes,
) -> Result<StatusCode, ApiError> {
    let LikeBody { user_id } = body(&payload)?;
    service.like_post(LikeRequest::new(post_id, user_id)).await?;
    Ok(StatusCode::OK)
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn info() -> Json<serde_json::Value> {
    Json(json!({
        "name": "microblog-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
