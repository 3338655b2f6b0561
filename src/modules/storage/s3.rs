use super::store::{ObjectStore, PutObject, StoreError};
use crate::types::StorageConfig;
use async_trait::async_trait;
use aws_sdk_s3::{
    config::{BehaviorVersion, Credentials, Region},
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    primitives::ByteStream,
    types::ObjectCannedAcl,
    Client,
};
use std::fmt::Debug;

/// Amazon S3 backed [`ObjectStore`].
///
/// A fresh client is built from the static credentials on every write.
#[derive(Clone)]
pub struct S3Store {
    cfg: StorageConfig,
}

impl S3Store {
    pub fn new(cfg: StorageConfig) -> Self {
        Self { cfg }
    }

    fn client(&self) -> Client {
        let credentials = Credentials::new(
            self.cfg.access_key_id.clone(),
            self.cfg.secret_access_key.clone(),
            None,
            None,
            "static",
        );

        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(self.cfg.region.clone()))
            .credentials_provider(credentials)
            .build();

        Client::from_conf(config)
    }
}

fn provider_message<E, R>(err: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: Debug,
{
    match err.as_service_error() {
        Some(service_err) => format!(
            "{}: {}",
            service_err.code().unwrap_or("Unknown"),
            service_err.message().unwrap_or("no message from storage service")
        ),
        None => DisplayErrorContext(err).to_string(),
    }
}

fn store_error<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: Debug,
{
    match err {
        SdkError::ConstructionFailure(_)
        | SdkError::TimeoutError(_)
        | SdkError::DispatchFailure(_)
        | SdkError::ResponseError(_)
        | SdkError::ServiceError(_) => StoreError::Provider(provider_message(&err)),
        // SdkError is non-exhaustive
        _ => StoreError::Other(DisplayErrorContext(&err).to_string().into()),
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(&self, object: PutObject) -> Result<(), StoreError> {
        self.client()
            .put_object()
            .bucket(&self.cfg.bucket_name)
            .key(&object.key)
            .content_type(object.content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .body(ByteStream::from(object.body))
            .send()
            .await
            .map(|_| ())
            .map_err(store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::{config::http::HttpResponse, operation::put_object::PutObjectError};

    #[test]
    fn transport_failures_count_as_provider_errors() {
        let err = SdkError::<PutObjectError, HttpResponse>::timeout_error("request timed out");

        match store_error(err) {
            StoreError::Provider(message) => assert!(message.contains("timed out")),
            StoreError::Other(err) => panic!("expected a provider error, got {err}"),
        }
    }
}
