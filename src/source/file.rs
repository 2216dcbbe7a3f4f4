use super::ImageSource;
use crate::{Error, Result};
use image::{ImageReader, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Image file on disk, decoded by content rather than extension
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ImageSource for FileSource {
    fn load(&mut self) -> Result<RgbaImage> {
        let _span = tracing::debug_span!("load").entered();

        tracing::debug!("Opening {}", self.path.display());

        let file = File::open(&self.path).map_err(|e| Error::from_open(self.path.clone(), e))?;

        let reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|source| Error::Read {
                path: self.path.clone(),
                source,
            })?;

        let decoded = reader.decode().map_err(|source| Error::Decode {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            "Decoded {}x{} image ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(decoded.into_rgba8())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
