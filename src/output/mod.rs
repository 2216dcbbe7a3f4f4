mod png_file;

pub use png_file::{save_matte, PngFile};

use crate::Result;
use image::RgbaImage;
use std::path::Path;

/// Trait for output destinations
pub trait OutputSink {
    /// Encode and write the image
    fn write_image(&mut self, image: &RgbaImage) -> Result<()>;

    /// Where the image is written
    fn location(&self) -> &Path;
}
