use async_trait::async_trait;

pub struct PutObject {
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage service (or its client) rejected the request.
    #[error("{0}")]
    Provider(String),
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Write side of a key addressed blob store.
///
/// Objects written through this trait are publicly readable.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, object: PutObject) -> Result<(), StoreError>;
}
