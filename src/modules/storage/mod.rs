//! Object storage for user uploaded media.
//!
//! [`Uploader`] takes anything implementing [`UploadSource`], stores it under a
//! randomized key through an [`ObjectStore`] and hands back the public URL of
//! the stored object.

mod s3;
mod source;
mod store;
mod upload;

pub use s3::S3Store;
pub use source::{UploadSource, UploadedFile};
pub use store::{ObjectStore, PutObject, StoreError};
pub use upload::{object_key, UploadError, UploadedObject, Uploader, DEFAULT_FOLDER};
