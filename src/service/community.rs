//! Community posts. Append-only.

use crate::error::AppError;
use crate::models::{CommunityPost, NewCommunityPost};
use chrono::Utc;
use sqlx::SqlitePool;

pub struct CommunityService;

impl CommunityService {
    /// Newest first; equal timestamps list the later insert first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<CommunityPost>, AppError> {
        let posts = sqlx::query_as(
            "SELECT id, user_name, title, content, created_at FROM community_posts ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(posts)
    }

    /// Store the post as given; absent fields stay null. Returns the new id.
    pub async fn create(pool: &SqlitePool, post: &NewCommunityPost) -> Result<i64, AppError> {
        let id = sqlx::query(
            "INSERT INTO community_posts (user_name, title, content, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&post.user_name)
        .bind(&post.title)
        .bind(&post.content)
        .bind(Utc::now().naive_utc())
        .execute(pool)
        .await?
        .last_insert_rowid();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect_in_memory, ensure_tables};

    #[tokio::test]
    async fn newest_post_lists_first() {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        for title in ["first", "second", "third"] {
            let post = NewCommunityPost {
                user_name: Some("asha".into()),
                title: Some(title.into()),
                content: Some("hello".into()),
            };
            CommunityService::create(&pool, &post).await.unwrap();
        }
        let titles: Vec<Option<String>> = CommunityService::list(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(
            titles,
            [Some("third".into()), Some("second".into()), Some("first".into())]
        );
    }

    #[tokio::test]
    async fn absent_fields_are_stored_as_null() {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        CommunityService::create(&pool, &NewCommunityPost::default())
            .await
            .unwrap();
        let posts = CommunityService::list(&pool).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].user_name.is_none());
        assert!(posts[0].content.is_none());
    }
}
