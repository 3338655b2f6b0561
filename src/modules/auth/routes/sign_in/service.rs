use super::types::{request, response};
use crate::{
    modules::{
        auth::{password, service},
        user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = user::repository::find_by_username(&ctx.db_conn.pool, payload.username)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or(response::Error::InvalidCredentials)?;

    if !password::verify(&payload.password, &user.password_hash) {
        return Err(response::Error::InvalidCredentials);
    }

    service::create_session(ctx.clone(), user.id)
        .await
        .map_err(|_| response::Error::FailedToCreateSession)
        .map(response::Success::SignedIn)
}
