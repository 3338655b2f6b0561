use super::types::{request, response};
use crate::{
    modules::{auth::middleware::Auth, user::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload, auth: Auth) -> response::Response {
    if payload.id == auth.user.id {
        return Err(response::Error::CannotUnfollowSelf);
    }

    let followee = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or(response::Error::UserNotFound)?;

    repository::unfollow(&ctx.db_conn.pool, auth.user.id, followee.id)
        .await
        .map_err(|_| response::Error::FailedToUnfollowUser)
        .map(|_| response::Success::UserUnfollowed)
}
