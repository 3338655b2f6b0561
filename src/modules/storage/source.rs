use axum_typed_multipart::FieldData;
use std::io::{self, Read, Seek, SeekFrom};
use tempfile::NamedTempFile;

/// A file handed to the uploader.
///
/// Implementors only need to be able to produce their remaining bytes, move
/// their cursor and report what the client declared about the file.
pub trait UploadSource {
    fn read(&mut self) -> io::Result<Vec<u8>>;

    fn seek(&mut self, position: u64) -> io::Result<u64>;

    fn name(&self) -> &str;

    fn content_type(&self) -> &str;
}

pub struct UploadedFile<R> {
    name: String,
    content_type: String,
    contents: R,
}

impl<R> UploadedFile<R> {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, contents: R) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            contents,
        }
    }
}

impl<R: Read + Seek> UploadSource for UploadedFile<R> {
    fn read(&mut self) -> io::Result<Vec<u8>> {
        let mut buf: Vec<u8> = vec![];
        self.contents.read_to_end(&mut buf)?;
        Ok(buf)
    }

    fn seek(&mut self, position: u64) -> io::Result<u64> {
        self.contents.seek(SeekFrom::Start(position))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }
}

impl From<FieldData<NamedTempFile>> for UploadedFile<NamedTempFile> {
    fn from(field: FieldData<NamedTempFile>) -> Self {
        // browsers always send a file name; fall back to the form field name
        let name = field
            .metadata
            .file_name
            .or(field.metadata.name)
            .unwrap_or_default();
        let content_type = field
            .metadata
            .content_type
            .unwrap_or_else(|| String::from("application/octet-stream"));

        Self::new(name, content_type, field.contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_remaining_bytes_and_rewinds() {
        let mut file = UploadedFile::new("a.txt", "text/plain", Cursor::new(b"hello".to_vec()));

        assert_eq!(file.read().unwrap(), b"hello");
        assert_eq!(file.read().unwrap(), b"");

        assert_eq!(file.seek(0).unwrap(), 0);
        assert_eq!(file.read().unwrap(), b"hello");
    }

    #[test]
    fn exposes_declared_metadata() {
        let file = UploadedFile::new("photo.JPG", "image/jpeg", Cursor::new(vec![]));

        assert_eq!(file.name(), "photo.JPG");
        assert_eq!(file.content_type(), "image/jpeg");
    }
}
