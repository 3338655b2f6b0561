mod create;
mod feed;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(feed::get_router())
        .merge(create::get_router())
}
