mod file;

pub use file::FileSource;

use crate::Result;
use image::RgbaImage;
use std::path::Path;

/// Trait for image sources
pub trait ImageSource {
    /// Load the image as RGBA, adding an opaque alpha channel if it has none
    fn load(&mut self) -> Result<RgbaImage>;

    /// Where the image comes from
    fn location(&self) -> &Path;
}
