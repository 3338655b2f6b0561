use crate::{
    modules::comment::repository::{self as comment_repository, FeedComment},
    utils::pagination::{Paginated, Pagination},
};
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{FromRow, PgConnection, PgExecutor};
use std::collections::HashMap;
use ulid::Ulid;

#[derive(Serialize, FromRow, Clone, Debug)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub picture: Option<String>,
    pub posted_at: NaiveDateTime,
}

#[derive(Serialize, FromRow, Clone, Debug)]
pub struct FeedPost {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub post: Post,
    pub username: String,
    #[sqlx(skip)]
    pub comments: Vec<FeedComment>,
}

pub struct CreatePostPayload {
    pub user_id: String,
    pub content: String,
    pub picture: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreatePostPayload) -> Result<Post, Error> {
    sqlx::query_as::<_, Post>(
        "
        INSERT INTO posts (id, user_id, content, picture)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(&payload.user_id)
    .bind(payload.content)
    .bind(payload.picture)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating a post for user {}: {}",
            payload.user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Post>, Error> {
    sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching post with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

const FEED_AUTHORS: &str = "
    posts.user_id = $1
    OR posts.user_id IN (SELECT followee_id FROM follows WHERE follower_id = $1)
";

/// Posts by `user_id` and everyone they follow, newest first, with comments.
pub async fn find_feed(
    conn: &mut PgConnection,
    user_id: String,
    pagination: Pagination,
) -> Result<Paginated<FeedPost>, Error> {
    let total: i64 = sqlx::query_scalar(&format!(
        "SELECT COUNT(posts.id) FROM posts WHERE {}",
        FEED_AUTHORS
    ))
    .bind(&user_id)
    .fetch_one(&mut *conn)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while counting feed for user {}: {}", user_id, err);
        Error::UnexpectedError
    })?;

    let mut posts = sqlx::query_as::<_, FeedPost>(&format!(
        "
        SELECT posts.*, users.username
        FROM posts
        INNER JOIN users ON users.id = posts.user_id
        WHERE {}
        ORDER BY posts.posted_at DESC, posts.id DESC
        LIMIT $2
        OFFSET $3
        ",
        FEED_AUTHORS
    ))
    .bind(&user_id)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(&mut *conn)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching feed for user {}: {}", user_id, err);
        Error::UnexpectedError
    })?;

    let post_ids = posts.iter().map(|post| post.post.id.clone()).collect();
    let mut comments_by_post: HashMap<String, Vec<FeedComment>> = HashMap::new();
    for comment in comment_repository::find_by_post_ids(&mut *conn, post_ids)
        .await
        .map_err(|_| Error::UnexpectedError)?
    {
        comments_by_post
            .entry(comment.comment.post_id.clone())
            .or_default()
            .push(comment);
    }

    for post in posts.iter_mut() {
        post.comments = comments_by_post.remove(&post.post.id).unwrap_or_default();
    }

    Ok(Paginated::new(
        posts,
        total as u32,
        pagination.page,
        pagination.per_page,
    ))
}
