use super::{repository::Session, service};
use crate::modules::user::{self, repository::User};
use crate::types::Context;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::RequestPartsExt;
use axum::{async_trait, Json};
use axum::{extract::Extension, http::request::Parts, response::Response};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde_json::json;
use std::sync::Arc;

enum Error {
    InvalidSession,
}

async fn get_auth_from_token(ctx: Arc<Context>, access_token: String) -> Result<Auth, Error> {
    let session = service::verify_access_token(ctx.clone(), access_token)
        .await
        .map_err(|err| {
            tracing::debug!("Rejected access token: {:?}", err);
            Error::InvalidSession
        })?;

    let user = user::repository::find_by_id(&ctx.db_conn.pool, session.user_id.clone())
        .await
        .map_err(|_| Error::InvalidSession)?
        .ok_or(Error::InvalidSession)?;

    Ok(Auth { user, session })
}

#[derive(Clone)]
pub struct Auth {
    pub user: User,
    pub session: Session,
}

fn invalid_session() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Invalid session token"})),
    )
        .into_response()
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| invalid_session())?;

        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|err| {
                tracing::error!("Context missing from request extensions: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            })?;

        get_auth_from_token(ctx, bearer.token().to_string())
            .await
            .map_err(|Error::InvalidSession| invalid_session())
    }
}
