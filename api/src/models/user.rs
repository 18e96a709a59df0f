use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ResidentialCollege;
use crate::store::Record;

/// A registered member as persisted in `users.json`.
///
/// The password is stored and compared as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rc: Option<ResidentialCollege>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Record for User {
    fn id(&self) -> i64 {
        self.id
    }
}

/// True when some user other than `user_id` already holds `nickname`.
pub fn nickname_taken(users: &[User], nickname: &str, user_id: i64) -> bool {
    users
        .iter()
        .any(|u| u.id != user_id && u.nickname.as_deref() == Some(nickname))
}
