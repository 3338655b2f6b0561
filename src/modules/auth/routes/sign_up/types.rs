pub mod request {
    use std::borrow::Cow;

    use regex::Regex;
    use serde::Deserialize;
    use validator::{Validate, ValidationError};

    fn validate_username(username: &str) -> Result<(), ValidationError> {
        let regex = Regex::new(r"^[A-Za-z0-9_]{3,30}$").expect("Invalid username regex");
        match regex.is_match(username) {
            true => Ok(()),
            false => Err(ValidationError::new("INVALID_USERNAME").with_message(Cow::from(
                "Username must be 3 to 30 letters, digits or underscores",
            ))),
        }
    }

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(custom(code = "INVALID_USERNAME", function = "validate_username"))]
        pub username: String,
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(
            min = 8,
            code = "PASSWORD_TOO_SHORT",
            message = "Password must be at least 8 characters long"
        ))]
        pub password: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::user::repository::User, utils::validation};

    pub enum Success {
        SignedUp(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedUp(user) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Account created!", "user": user })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToFetchUser,
        UsernameAlreadyInUse,
        EmailAlreadyInUse,
        SignupFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToFetchUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user" })),
                )
                    .into_response(),
                Self::UsernameAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Username already in use" })),
                )
                    .into_response(),
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Email already in use" })),
                )
                    .into_response(),
                Self::SignupFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sign up failed!" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
