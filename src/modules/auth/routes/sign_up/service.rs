use super::types::{request, response};
use crate::{
    modules::{auth::password, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let email = payload.email.to_lowercase();

    if let Some(user) = user::repository::find_by_username_or_email(
        &ctx.db_conn.pool,
        user::repository::FindByUsernameOrEmail {
            username: payload.username.clone(),
            email: email.clone(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchUser)?
    {
        if user.username == payload.username {
            return Err(response::Error::UsernameAlreadyInUse);
        }
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash =
        password::hash(&payload.password).map_err(|_| response::Error::SignupFailed)?;

    user::repository::create(
        &ctx.db_conn.pool,
        user::repository::CreateUserPayload {
            username: payload.username,
            email,
            password_hash,
        },
    )
    .await
    .map_err(|_| response::Error::SignupFailed)
    .map(response::Success::SignedUp)
}
