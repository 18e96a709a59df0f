use serde::Serialize;

use crate::{
    growth::GrowthState,
    models::{Post, ResidentialCollege, User},
};

/// Acknowledgement for mutations that return no record.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// What a client may see of a user. The password never leaves the store.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub nickname: Option<String>,
    pub rc: Option<ResidentialCollege>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            nickname: user.nickname,
            rc: user.rc,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub success: bool,
    pub posts: Vec<Post>,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub post: Post,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub success: bool,
    pub message: String,
    pub liked: bool,
    pub likes: u64,
}

#[derive(Debug, Serialize)]
pub struct GrowthResponse {
    pub success: bool,
    #[serde(flatten)]
    pub state: GrowthState,
}
