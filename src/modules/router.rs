use super::{auth, comment, post, user};
use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/auth", auth::get_router())
        .nest("/users", user::get_router())
        .nest("/posts", post::get_router())
        .nest("/posts/:id/comments", comment::get_router())
}
