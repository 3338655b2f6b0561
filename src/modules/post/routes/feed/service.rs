use super::types::{request, response};
use crate::{
    modules::{auth::middleware::Auth, post::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload, auth: Auth) -> response::Response {
    let mut conn = ctx.db_conn.pool.acquire().await.map_err(|err| {
        tracing::error!("Failed to acquire database connection: {}", err);
        response::Error::FailedToFetchFeed
    })?;

    repository::find_feed(&mut *conn, auth.user.id, payload.pagination)
        .await
        .map_err(|_| response::Error::FailedToFetchFeed)
        .map(response::Success::Feed)
}
