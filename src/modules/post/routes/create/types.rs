pub mod request {
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;
    use validator::Validate;

    use crate::utils::validation::validate_not_blank;

    #[derive(TryFromMultipart, Validate)]
    pub struct Payload {
        #[validate(
            custom(code = "BLANK_FIELD", function = "validate_not_blank"),
            length(max = 1000, code = "CONTENT_TOO_LONG", message = "Post is too long")
        )]
        pub content: String,
        #[form_data(limit = "10MiB")]
        pub picture: Option<FieldData<NamedTempFile>>,
    }
}

pub mod response {
    use axum::{
        extract::Json,
        http::{header, StatusCode},
        response::IntoResponse,
    };
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{
        modules::{post::repository::Post, storage::UploadError},
        utils::validation,
    };

    pub enum Success {
        PostCreated(Post),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PostCreated(post) => (
                    StatusCode::CREATED,
                    [(header::LOCATION, "/api/posts")],
                    Json(json!({ "message": "Post created!", "post": post })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        ImageUploadFailed(UploadError),
        PostCreationFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::ImageUploadFailed(err) => {
                    let status = match err {
                        UploadError::Provider(_) => StatusCode::BAD_GATEWAY,
                        UploadError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
                    };
                    (
                        status,
                        Json(json!({ "error": format!("Failed to upload image: {}", err) })),
                    )
                        .into_response()
                }
                Self::PostCreationFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Post creation failed" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
