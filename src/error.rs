use image::ImageError;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a single background-removal run
///
/// Every variant carries the path it failed on. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input image not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

impl Error {
    /// Classify an error from opening an input file
    pub(crate) fn from_open(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound { path }
        } else {
            Error::Read { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = Error::from_open(
            PathBuf::from("nope.png"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.to_string(), "input image not found: nope.png");
    }

    #[test]
    fn other_io_failures_map_to_read() {
        let err = Error::from_open(
            PathBuf::from("locked.png"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, Error::Read { .. }));
    }
}
