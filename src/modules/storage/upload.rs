use super::{
    s3::S3Store,
    source::UploadSource,
    store::{ObjectStore, PutObject, StoreError},
};
use crate::types::StorageConfig;
use std::sync::Arc;
use uuid::Uuid;

pub const DEFAULT_FOLDER: &str = "media";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("{0}")]
    Provider(String),
    #[error("An unexpected error occurred during file upload")]
    Unexpected,
}

#[derive(Clone, Debug)]
pub struct UploadedObject {
    pub key: String,
    pub url: String,
}

/// Builds `{folder}/{token}.{extension}` where the extension is whatever
/// follows the last `.` of `file_name`, or the whole name if it has none.
pub fn object_key(folder: &str, file_name: &str, token: Uuid) -> String {
    let extension = file_name.rsplit('.').next().unwrap_or(file_name);
    format!("{}/{}.{}", folder, token, extension)
}

#[derive(Clone)]
pub struct Uploader {
    cfg: StorageConfig,
    store: Arc<dyn ObjectStore>,
}

impl Uploader {
    pub fn new(cfg: StorageConfig) -> Self {
        let store = Arc::new(S3Store::new(cfg.clone()));
        Self::with_store(cfg, store)
    }

    pub fn with_store(cfg: StorageConfig, store: Arc<dyn ObjectStore>) -> Self {
        Self { cfg, store }
    }

    pub fn public_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.cfg.bucket_name, self.cfg.region, key
        )
    }

    pub async fn upload_file<S: UploadSource>(
        &self,
        source: &mut S,
    ) -> Result<UploadedObject, UploadError> {
        self.upload_file_to(source, DEFAULT_FOLDER).await
    }

    /// Stores the contents of `source` under `folder`.
    ///
    /// The source is always rewound to its start before this returns, even on
    /// failure, so callers can read it again.
    pub async fn upload_file_to<S: UploadSource>(
        &self,
        source: &mut S,
        folder: &str,
    ) -> Result<UploadedObject, UploadError> {
        let contents = source.read();
        let rewound = source.seek(0);

        let contents = contents
            .and_then(|contents| rewound.map(|_| contents))
            .map_err(|err| {
                tracing::error!("Unexpected error while reading the uploaded file: {:?}", err);
                UploadError::Unexpected
            })?;

        let key = object_key(folder, source.name(), Uuid::new_v4());
        tracing::debug!("Uploading {} bytes to {}", contents.len(), key);

        self.store
            .put_object(PutObject {
                key: key.clone(),
                body: contents,
                content_type: source.content_type().to_string(),
            })
            .await
            .map_err(|err| match err {
                StoreError::Provider(message) => {
                    tracing::error!("AWS S3 upload error: {}", message);
                    UploadError::Provider(message)
                }
                StoreError::Other(err) => {
                    tracing::error!("Unexpected error during S3 upload: {:?}", err);
                    UploadError::Unexpected
                }
            })?;

        let url = self.public_url(&key);
        Ok(UploadedObject { key, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::UploadedFile;
    use async_trait::async_trait;
    use std::io::{self, Cursor};
    use std::sync::Mutex;
    use uuid::Version;

    enum Outcome {
        Stored,
        Rejected(&'static str),
        Broken,
    }

    struct FakeStore {
        outcome: Outcome,
        objects: Mutex<Vec<PutObject>>,
    }

    impl FakeStore {
        fn new(outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                objects: Mutex::new(vec![]),
            })
        }
    }

    #[async_trait]
    impl ObjectStore for FakeStore {
        async fn put_object(&self, object: PutObject) -> Result<(), StoreError> {
            self.objects.lock().unwrap().push(object);
            match self.outcome {
                Outcome::Stored => Ok(()),
                Outcome::Rejected(message) => Err(StoreError::Provider(message.to_string())),
                Outcome::Broken => Err(StoreError::Other(
                    io::Error::new(io::ErrorKind::Other, "socket closed").into(),
                )),
            }
        }
    }

    /// Tracks its own cursor and can be told to fail reading.
    struct TrackedSource {
        name: &'static str,
        data: Vec<u8>,
        position: u64,
        fail_read: bool,
    }

    impl TrackedSource {
        fn new(name: &'static str, data: &[u8]) -> Self {
            Self {
                name,
                data: data.to_vec(),
                position: 0,
                fail_read: false,
            }
        }
    }

    impl UploadSource for TrackedSource {
        fn read(&mut self) -> io::Result<Vec<u8>> {
            if self.fail_read {
                self.position = 3;
                return Err(io::Error::new(io::ErrorKind::Other, "disk went away"));
            }
            let rest = self.data[self.position as usize..].to_vec();
            self.position = self.data.len() as u64;
            Ok(rest)
        }

        fn seek(&mut self, position: u64) -> io::Result<u64> {
            self.position = position;
            Ok(position)
        }

        fn name(&self) -> &str {
            self.name
        }

        fn content_type(&self) -> &str {
            "image/jpeg"
        }
    }

    fn config() -> StorageConfig {
        StorageConfig {
            access_key_id: String::from("AKIDEXAMPLE"),
            secret_access_key: String::from("secret"),
            region: String::from("eu-west-2"),
            bucket_name: String::from("sqn-bucket"),
        }
    }

    fn split_key<'a>(key: &'a str, folder: &str) -> (Uuid, &'a str) {
        let rest = key
            .strip_prefix(folder)
            .and_then(|rest| rest.strip_prefix('/'))
            .expect("key starts with folder");
        let (token, extension) = rest.split_once('.').expect("key has an extension");
        (Uuid::parse_str(token).expect("token is a uuid"), extension)
    }

    #[tokio::test]
    async fn stores_under_default_folder_and_returns_public_url() {
        let store = FakeStore::new(Outcome::Stored);
        let uploader = Uploader::with_store(config(), store.clone());
        let mut source = TrackedSource::new("photo.JPG", b"jpeg bytes");

        let uploaded = uploader.upload_file(&mut source).await.unwrap();

        let (token, extension) = split_key(&uploaded.key, "media");
        assert_eq!(token.get_version(), Some(Version::Random));
        assert_eq!(extension, "JPG");
        assert_eq!(
            uploaded.url,
            format!(
                "https://sqn-bucket.s3.eu-west-2.amazonaws.com/media/{}.JPG",
                token
            )
        );

        let objects = store.objects.lock().unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].key, uploaded.key);
        assert_eq!(objects[0].body, b"jpeg bytes");
        assert_eq!(objects[0].content_type, "image/jpeg");
    }

    #[tokio::test]
    async fn name_without_dot_becomes_the_extension() {
        let uploader = Uploader::with_store(config(), FakeStore::new(Outcome::Stored));
        let mut source = TrackedSource::new("noext", b"x");

        let uploaded = uploader.upload_file(&mut source).await.unwrap();

        let (_, extension) = split_key(&uploaded.key, "media");
        assert_eq!(extension, "noext");
    }

    #[tokio::test]
    async fn uses_the_requested_folder() {
        let uploader = Uploader::with_store(config(), FakeStore::new(Outcome::Stored));
        let mut source = TrackedSource::new("archive.tar.gz", b"x");

        let uploaded = uploader
            .upload_file_to(&mut source, "sqn-data")
            .await
            .unwrap();

        let (_, extension) = split_key(&uploaded.key, "sqn-data");
        assert_eq!(extension, "gz");
        assert!(uploaded
            .url
            .starts_with("https://sqn-bucket.s3.eu-west-2.amazonaws.com/sqn-data/"));
    }

    #[tokio::test]
    async fn provider_rejection_keeps_the_provider_message() {
        let uploader = Uploader::with_store(
            config(),
            FakeStore::new(Outcome::Rejected("AccessDenied: Access Denied")),
        );
        let mut source = TrackedSource::new("photo.png", b"png");

        let err = uploader.upload_file(&mut source).await.unwrap_err();

        assert!(matches!(err, UploadError::Provider(_)));
        assert_eq!(err.to_string(), "AccessDenied: Access Denied");
        assert_eq!(source.position, 0);
    }

    #[tokio::test]
    async fn other_store_failures_are_hidden() {
        let uploader = Uploader::with_store(config(), FakeStore::new(Outcome::Broken));
        let mut source = TrackedSource::new("photo.png", b"png");

        let err = uploader.upload_file(&mut source).await.unwrap_err();

        assert!(matches!(err, UploadError::Unexpected));
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred during file upload"
        );
        assert_eq!(source.position, 0);
    }

    #[tokio::test]
    async fn read_failure_is_unexpected_and_still_rewinds() {
        let store = FakeStore::new(Outcome::Stored);
        let uploader = Uploader::with_store(config(), store.clone());
        let mut source = TrackedSource::new("photo.png", b"png");
        source.fail_read = true;

        let err = uploader.upload_file(&mut source).await.unwrap_err();

        assert!(matches!(err, UploadError::Unexpected));
        assert_eq!(source.position, 0);
        assert!(store.objects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn uploaded_file_can_be_read_again_afterwards() {
        let uploader = Uploader::with_store(config(), FakeStore::new(Outcome::Stored));
        let mut file = UploadedFile::new(
            "cat.gif",
            "image/gif",
            Cursor::new(b"GIF89a".to_vec()),
        );

        uploader.upload_file(&mut file).await.unwrap();

        assert_eq!(file.read().unwrap(), b"GIF89a");
    }

    #[tokio::test]
    async fn every_upload_gets_a_fresh_key() {
        let uploader = Uploader::with_store(config(), FakeStore::new(Outcome::Stored));

        let first = uploader
            .upload_file(&mut TrackedSource::new("a.png", b"1"))
            .await
            .unwrap();
        let second = uploader
            .upload_file(&mut TrackedSource::new("a.png", b"1"))
            .await
            .unwrap();

        assert_ne!(first.key, second.key);
    }

    #[test]
    fn object_key_keeps_extension_case() {
        let token = Uuid::new_v4();

        assert_eq!(
            object_key("media", "photo.JPG", token),
            format!("media/{}.JPG", token)
        );
        assert_eq!(
            object_key("media", "noext", token),
            format!("media/{}.noext", token)
        );
        assert_eq!(object_key("media", "", token), format!("media/{}.", token));
    }
}
