use super::repository::{self, Session};
use crate::types::Context;
use chrono::{Duration, Utc};
use std::sync::Arc;
use ulid::Ulid;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidSession,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create_session(ctx: Arc<Context>, user_id: String) -> Result<Session> {
    repository::create(
        &ctx.db_conn.pool,
        repository::SessionCreationPayload {
            user_id,
            access_token: Ulid::new().to_string(),
            expires_at: Utc::now().naive_utc() + Duration::hours(ctx.app.session_ttl_hours),
        },
    )
    .await
    .map_err(|_| Error::UnexpectedError)
}

pub async fn verify_access_token(ctx: Arc<Context>, access_token: String) -> Result<Session> {
    let session = repository::find_by_access_token(&ctx.db_conn.pool, access_token)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if session.expires_at < Utc::now().naive_utc() {
        return Err(Error::ExpiredToken);
    };

    Ok(session)
}

pub async fn revoke_session(ctx: Arc<Context>, session: Session) -> Result<()> {
    repository::delete_by_id(&ctx.db_conn.pool, session.id)
        .await
        .map_err(|_| Error::UnexpectedError)
}
