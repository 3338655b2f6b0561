use crate::modules::auth::middleware::Auth;
use axum::{http::StatusCode, response::IntoResponse, Json};

pub async fn handler(auth: Auth) -> impl IntoResponse {
    (StatusCode::OK, Json(auth.user))
}
