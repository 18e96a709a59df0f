use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Not checked against the users collection.
    #[serde(default)]
    pub author_id: Option<i64>,
    /// Free-form; copied from the request as given.
    #[serde(default)]
    pub rc: Option<String>,
    #[serde(default)]
    pub likes: u64,
    /// `None` on posts written before likes existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked_by: Option<Vec<i64>>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Adds or removes `user_id` from the likers and returns whether the post
    /// is now liked by them. `likes` always equals the number of likers
    /// afterwards.
    pub fn toggle_like(&mut self, user_id: i64) -> bool {
        let likers = self.liked_by.get_or_insert_with(Vec::new);

        let liked = match likers.iter().position(|&id| id == user_id) {
            Some(pos) => {
                likers.remove(pos);
                false
            }
            None => {
                likers.push(user_id);
                true
            }
        };

        self.likes = likers.len() as u64;
        liked
    }
}

impl Record for Post {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_post() -> Post {
        serde_json::from_str(
            r#"{"id":10,"title":"t","content":"c","author":"A","authorId":1,"createdAt":"2024-03-01T09:00:00.000Z"}"#,
        )
        .unwrap()
    }

    #[test]
    fn legacy_post_gains_likers_on_first_toggle() {
        let mut post = legacy_post();
        assert!(post.liked_by.is_none());

        assert!(post.toggle_like(7));
        assert_eq!(post.liked_by.as_deref(), Some(&[7][..]));
        assert_eq!(post.likes, 1);
    }

    #[test]
    fn toggling_twice_restores_likers() {
        let mut post = legacy_post();
        post.toggle_like(1);
        post.toggle_like(2);
        let before = post.liked_by.clone();

        assert!(post.toggle_like(3));
        assert!(!post.toggle_like(3));
        assert_eq!(post.liked_by, before);
        assert_eq!(post.likes, 2);
    }

    #[test]
    fn likes_track_liker_count() {
        let mut post = legacy_post();
        for user in [1, 2, 1, 3, 2, 2] {
            post.toggle_like(user);
            assert_eq!(post.likes as usize, post.liked_by.as_ref().unwrap().len());
        }
    }
}
