use super::types::{request, response};
use crate::{
    modules::{auth::middleware::Auth, comment::repository, post},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload, auth: Auth) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let post = post::repository::find_by_id(&ctx.db_conn.pool, payload.post_id)
        .await
        .map_err(|_| response::Error::FailedToFetchPost)?
        .ok_or(response::Error::PostNotFound)?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateCommentPayload {
            post_id: post.id,
            user_id: auth.user.id,
            content: payload.content,
        },
    )
    .await
    .map_err(|_| response::Error::CommentCreationFailed)
    .map(response::Success::CommentCreated)
}
