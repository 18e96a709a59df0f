use crate::{
    AppState,
    dto::{
        CreatePostRequest, LikeResponse, PostFilter, PostListResponse, PostResponse,
        ToggleLikeRequest,
    },
    errors::ApiError,
    extract::{ValidatedJson, require},
    models::Post,
    store::next_id,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use tracing::info;

fn post_not_found() -> ApiError {
    ApiError::NotFound("Post not found.".into())
}

/// POST /api/posts
/// Body: { "title": "...", "content": "...", "author": "...", "authorId": 1, "rc": null }
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let title = require(payload.title)?.trim().to_string();
    let content = require(payload.content)?.trim().to_string();
    let author = require(payload.author)?;
    let author_id = payload.author_id;
    let rc = payload.rc;

    let post = state
        .store
        .posts
        .update(move |posts| -> Result<_, ApiError> {
            let post = Post {
                id: next_id(posts),
                title,
                content,
                author,
                author_id,
                rc,
                likes: 0,
                liked_by: Some(Vec::new()),
                created_at: Utc::now(),
            };
            posts.push(post.clone());
            Ok(post)
        })
        .await?;

    info!("Post created: {} by {}", post.id, post.author);

    Ok(Json(PostResponse {
        success: true,
        message: Some("Post created.".into()),
        post,
    }))
}

/// GET /api/posts?rc=College A
/// Newest first. An empty `rc` is treated as no filter.
pub async fn get_posts(
    State(state): State<AppState>,
    Query(filter): Query<PostFilter>,
) -> Result<Json<PostListResponse>, ApiError> {
    let mut posts = state.store.posts.load().await?;

    if let Some(rc) = filter.rc.as_deref().filter(|rc| !rc.is_empty()) {
        posts.retain(|p| p.rc.as_deref() == Some(rc));
    }

    // Ids are creation timestamps, so this is newest first
    posts.sort_by(|a, b| b.id.cmp(&a.id));

    Ok(Json(PostListResponse {
        success: true,
        posts,
    }))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, ApiError> {
    let id: i64 = id.parse().map_err(|_| post_not_found())?;

    let post = state
        .store
        .posts
        .load()
        .await?
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(post_not_found)?;

    Ok(Json(PostResponse {
        success: true,
        message: None,
        post,
    }))
}

/// POST /api/posts/like
/// Body: { "postId": 1, "userId": 2 }
/// Likes the post, or takes the like back if the user already liked it.
pub async fn toggle_like(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ToggleLikeRequest>,
) -> Result<Json<LikeResponse>, ApiError> {
    let post_id = require(payload.post_id)?;
    let user_id = require(payload.user_id)?;

    let (liked, likes) = state
        .store
        .posts
        .update(move |posts| -> Result<_, ApiError> {
            let post = posts
                .iter_mut()
                .find(|p| p.id == post_id)
                .ok_or_else(post_not_found)?;
            let liked = post.toggle_like(user_id);
            Ok((liked, post.likes))
        })
        .await?;

    info!(
        "User {} {} post {} ({} likes)",
        user_id,
        if liked { "liked" } else { "unliked" },
        post_id,
        likes
    );

    Ok(Json(LikeResponse {
        success: true,
        message: if liked { "Liked." } else { "Like removed." }.into(),
        liked,
        likes,
    }))
}
