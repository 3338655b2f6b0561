pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    use crate::utils::validation::validate_not_blank;

    #[derive(Deserialize)]
    pub struct Body {
        pub content: String,
    }

    #[derive(Validate)]
    pub struct Payload {
        pub post_id: String,
        #[validate(
            custom(code = "BLANK_FIELD", function = "validate_not_blank"),
            length(max = 500, code = "CONTENT_TOO_LONG", message = "Comment is too long")
        )]
        pub content: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::comment::repository::Comment, utils::validation};

    pub enum Success {
        CommentCreated(Comment),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CommentCreated(comment) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Comment added!", "comment": comment })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        PostNotFound,
        FailedToFetchPost,
        CommentCreationFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::PostNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Post not found" })),
                )
                    .into_response(),
                Self::FailedToFetchPost => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch post" })),
                )
                    .into_response(),
                Self::CommentCreationFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to add comment" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
