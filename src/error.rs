use std::io;
use std::path::PathBuf;

/// Everything that can stop an icon generation run.
///
/// None of these are recovered from: the first error aborts the run and is
/// reported to the caller.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The source image path does not exist.
    #[error("source image not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The source image path exists but is not a regular file.
    #[error("source path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The source file could not be decoded as an image.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        /// The file that failed to decode.
        path: PathBuf,
        /// The underlying decoder error.
        source: image::ImageError,
    },

    /// A directory or file could not be created or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path being created or written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A PNG could not be encoded.
    #[error("failed to encode PNG {}: {source}", path.display())]
    Encode {
        /// The PNG file being written.
        path: PathBuf,
        /// The underlying encoder error.
        source: png::EncodingError,
    },

    /// The icon manifest could not be serialized.
    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl IconError {
    /// Wraps an I/O error together with the path it concerns.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> IconError {
        IconError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_path() {
        let err = IconError::NotFound(PathBuf::from("missing.png"));
        assert_eq!(err.to_string(), "source image not found: missing.png");
        let err = IconError::NotAFile(PathBuf::from("some/dir"));
        assert_eq!(err.to_string(), "source path is not a file: some/dir");
    }

    #[test]
    fn io_error_keeps_source() {
        let err = IconError::io(
            "out/Contents.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on out/Contents.json: denied");
        assert!(std::error::Error::source(&err).is_some());
    }
}
