use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

#[derive(Serialize, FromRow, Clone, Debug)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, FromRow, Clone, Debug)]
pub struct FeedComment {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub comment: Comment,
    pub username: String,
}

pub struct CreateCommentPayload {
    pub post_id: String,
    pub user_id: String,
    pub content: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateCommentPayload,
) -> Result<Comment, Error> {
    sqlx::query_as::<_, Comment>(
        "
        INSERT INTO comments (id, post_id, user_id, content)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(&payload.post_id)
    .bind(payload.user_id)
    .bind(payload.content)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while commenting on post {}: {}",
            payload.post_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_post_ids<'e, E: PgExecutor<'e>>(
    e: E,
    post_ids: Vec<String>,
) -> Result<Vec<FeedComment>, Error> {
    if post_ids.is_empty() {
        return Ok(vec![]);
    }

    sqlx::query_as::<_, FeedComment>(
        "
        SELECT comments.*, users.username
        FROM comments
        INNER JOIN users ON users.id = comments.user_id
        WHERE comments.post_id = ANY($1)
        ORDER BY comments.created_at ASC, comments.id ASC
        ",
    )
    .bind(post_ids)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching comments for posts: {}", err);
        Error::UnexpectedError
    })
}
