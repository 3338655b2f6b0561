use super::types::{request, response};
use crate::{
    modules::{auth::middleware::Auth, post::repository, storage::UploadedFile},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

const PICTURE_FOLDER: &str = "sqn-data";

pub async fn service(ctx: Arc<Context>, payload: request::Payload, auth: Auth) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    // the post is only written once the picture is stored; a failed insert
    // after a successful upload leaves the object behind in the bucket
    let picture = match payload.picture {
        Some(picture) => {
            let mut file = UploadedFile::from(picture);
            let uploaded = ctx
                .storage
                .uploader
                .upload_file_to(&mut file, PICTURE_FOLDER)
                .await
                .map_err(response::Error::ImageUploadFailed)?;

            tracing::info!("Uploaded post picture to {}", uploaded.key);
            Some(uploaded.url)
        }
        None => None,
    };

    repository::create(
        &ctx.db_conn.pool,
        repository::CreatePostPayload {
            user_id: auth.user.id,
            content: payload.content,
            picture,
        },
    )
    .await
    .map_err(|_| response::Error::PostCreationFailed)
    .map(response::Success::PostCreated)
}
