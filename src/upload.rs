use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// An already-open readable byte source destined for a multipart upload.
///
/// The file name is sent to the server as the part's name; the reader is
/// drained into a buffer when the request is built (whole-buffer model).
pub struct InputStream {
    file_name: String,
    reader: Box<dyn Read + Send + 'static>,
}

impl InputStream {
    pub fn new(file_name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        Self {
            file_name: file_name.into(),
            reader: Box::new(reader),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub(crate) fn into_bytes(mut self) -> io::Result<(String, Vec<u8>)> {
        let mut buffer = Vec::new();
        self.reader.read_to_end(&mut buffer)?;
        Ok((self.file_name, buffer))
    }
}

impl fmt::Debug for InputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputStream")
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

/// Caller-supplied value for an upload-capable parameter.
///
/// Strings are classified at call time (URL, server-issued file id, or local
/// path); streams are always uploaded as multipart content.
#[derive(Debug)]
pub enum FileInput {
    Text(String),
    Stream(InputStream),
}

impl FileInput {
    /// Wraps an open readable source; always routed to a multipart upload.
    pub fn stream(file_name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        FileInput::Stream(InputStream::new(file_name, reader))
    }
}

impl From<&str> for FileInput {
    fn from(text: &str) -> Self {
        FileInput::Text(text.to_string())
    }
}

impl From<String> for FileInput {
    fn from(text: String) -> Self {
        FileInput::Text(text)
    }
}

impl From<&Path> for FileInput {
    fn from(path: &Path) -> Self {
        FileInput::Text(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for FileInput {
    fn from(path: PathBuf) -> Self {
        FileInput::Text(path.to_string_lossy().into_owned())
    }
}

impl From<InputStream> for FileInput {
    fn from(stream: InputStream) -> Self {
        FileInput::Stream(stream)
    }
}

/// Result of classifying a [`FileInput`].
#[derive(Debug)]
pub enum Uploadable {
    /// URL or opaque file identifier, passed through as a plain field.
    RemoteReference(String),
    /// Path that existed on the local filesystem at call time; opened and
    /// attached as a multipart file.
    LocalPath(PathBuf),
    /// Open byte source, attached as a multipart file.
    Stream(InputStream),
}

/// Classifies an upload-capable value.
///
/// Runs once per call at the boundary, is never cached, and does no I/O
/// beyond the filesystem-existence check. A string naming a path that does
/// not exist is treated as a remote reference and forwarded verbatim; the
/// server decides whether it means anything.
pub fn classify(input: FileInput) -> Uploadable {
    match input {
        FileInput::Stream(stream) => Uploadable::Stream(stream),
        FileInput::Text(text) => {
            if Path::new(&text).exists() {
                Uploadable::LocalPath(PathBuf::from(text))
            } else {
                Uploadable::RemoteReference(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write as _;

    #[test]
    fn test_existing_path_classifies_as_local() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"image bytes").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        match classify(FileInput::from(path.clone())) {
            Uploadable::LocalPath(p) => assert_eq!(p, Path::new(&path)),
            other => panic!("expected LocalPath, got {:?}", other),
        }
    }

    #[test]
    fn test_deleted_path_classifies_as_remote() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_string_lossy().into_owned();
        file.close().unwrap();

        match classify(FileInput::from(path.clone())) {
            Uploadable::RemoteReference(r) => assert_eq!(r, path),
            other => panic!("expected RemoteReference, got {:?}", other),
        }
    }

    #[test]
    fn test_url_and_file_id_classify_as_remote() {
        for text in ["https://example.com/cat.png", "AgADBAADq6cxG2fA"] {
            match classify(FileInput::from(text)) {
                Uploadable::RemoteReference(r) => assert_eq!(r, text),
                other => panic!("expected RemoteReference, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_stream_always_classifies_as_stream() {
        let input = FileInput::stream("photo.png", Cursor::new(vec![1, 2, 3]));
        match classify(input) {
            Uploadable::Stream(stream) => {
                let (name, bytes) = stream.into_bytes().unwrap();
                assert_eq!(name, "photo.png");
                assert_eq!(bytes, vec![1, 2, 3]);
            }
            other => panic!("expected Stream, got {:?}", other),
        }
    }
}
