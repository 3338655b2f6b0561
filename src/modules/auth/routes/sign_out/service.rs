use super::types::response;
use crate::{
    modules::auth::{middleware::Auth, service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    service::revoke_session(ctx, auth.session)
        .await
        .map_err(|_| response::Error::FailedToSignOut)
        .map(|_| response::Success::SignedOut)
}
