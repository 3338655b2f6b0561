mod follow;
mod get;
mod profile;
mod unfollow;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(profile::get_router())
        .merge(get::get_router())
        .merge(follow::get_router())
        .merge(unfollow::get_router())
}
