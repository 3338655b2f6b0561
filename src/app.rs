use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

// room for the multipart framing around a 10 MiB picture
const MAX_BODY_SIZE: usize = 1024 * 1024 * 11;

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

pub fn router(ctx: Arc<Context>) -> Router {
    Router::new()
        .nest("/api", modules::get_router())
        .with_state(ctx.clone())
        .layer(Extension(ctx))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([
                    Method::OPTIONS,
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_origin(cors::Any),
        )
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = router(ctx.clone());
        Self { ctx, router }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let listener =
            TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port)).await?;

        tracing::info!(
            "App is running on {} ({:?})",
            self.ctx.app.url,
            self.ctx.app.environment
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        modules::storage::{ObjectStore, PutObject, StoreError},
        types::testing,
    };
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct UnusedStore;

    #[async_trait]
    impl ObjectStore for UnusedStore {
        async fn put_object(&self, _: PutObject) -> Result<(), StoreError> {
            panic!("no upload expected")
        }
    }

    fn test_router() -> Router {
        router(testing::context(Arc::new(UnusedStore)))
    }

    fn sign_up_request(username_len: usize) -> Request<Body> {
        let body = json!({
            "username": "a".repeat(username_len),
            "email": "not-an-email",
            "password": "short"
        });

        Request::post("/api/auth/sign-up")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn feed_requires_a_session() {
        let response = test_router()
            .oneshot(Request::get("/api/posts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Invalid session token" })
        );
    }

    #[tokio::test]
    async fn post_creation_is_rejected_before_reading_the_form() {
        let response = test_router()
            .oneshot(
                Request::post("/api/posts")
                    .header(header::CONTENT_TYPE, "multipart/form-data; boundary=X")
                    .body(Body::from("--X--\r\n"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_token_is_rejected_when_sessions_cannot_be_loaded() {
        let response = test_router()
            .oneshot(
                Request::post("/api/posts/01J9ZQ/comments")
                    .header(header::AUTHORIZATION, "Bearer not-a-session")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({ "content": "hi" }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn sign_up_validates_before_touching_the_database() {
        let response = test_router()
            .oneshot(
                Request::post("/api/auth/sign-up")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "username": "  ",
                            "email": "not-an-email",
                            "password": "short"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert!(body["errors"]["username"].is_array());
        assert!(body["errors"]["email"].is_array());
        assert!(body["errors"]["password"].is_array());
    }

    #[tokio::test]
    async fn bodies_just_over_ten_mebibytes_are_read() {
        let response = test_router()
            .oneshot(sign_up_request(1024 * 1024 * 10 + 1024))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn oversized_bodies_are_refused() {
        let response = test_router()
            .oneshot(sign_up_request(MAX_BODY_SIZE + 1))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
