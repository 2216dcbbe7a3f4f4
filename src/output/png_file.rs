use super::OutputSink;
use crate::{Error, Result};
use image::{GrayImage, ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// PNG file on disk
///
/// Always encoded as PNG regardless of the path's extension. Missing parent
/// directories are a write error; they are not created.
pub struct PngFile {
    path: PathBuf,
}

impl PngFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl OutputSink for PngFile {
    fn write_image(&mut self, image: &RgbaImage) -> Result<()> {
        let _span = tracing::debug_span!("encode").entered();

        tracing::debug!(
            "Encoding {}x{} PNG to {}",
            image.width(),
            image.height(),
            self.path.display()
        );

        image
            .save_with_format(&self.path, ImageFormat::Png)
            .map_err(|source| Error::Write {
                path: self.path.clone(),
                source,
            })
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Write a grayscale matte as PNG
pub fn save_matte<P: AsRef<Path>>(matte: &GrayImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("encode_matte").entered();

    matte
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgba};

    #[test]
    fn writes_rgba_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let image = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 0]));

        PngFile::new(&path).write_image(&image).unwrap();

        let written = image::open(&path).unwrap();
        assert_eq!(image::guess_format(&std::fs::read(&path).unwrap()).unwrap(), ImageFormat::Png);
        assert_eq!(written.color(), image::ColorType::Rgba8);
        assert_eq!(written.into_rgba8(), image);
    }

    #[test]
    fn extension_does_not_change_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let image = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4]));

        PngFile::new(&path).write_image(&image).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn missing_parent_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.png");
        let image = RgbaImage::new(1, 1);

        let err = PngFile::new(&path).write_image(&image).unwrap_err();
        assert!(matches!(err, Error::Write { .. }), "got {err:?}");
        assert!(!path.exists());
    }

    #[test]
    fn matte_round_trips_as_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matte.png");
        let matte = GrayImage::from_fn(2, 1, |x, _| Luma([if x == 0 { 0 } else { 255 }]));

        save_matte(&matte, &path).unwrap();

        assert_eq!(image::open(&path).unwrap().into_luma8(), matte);
    }
}
