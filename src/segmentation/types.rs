use image::Rgba;

/// Pixel written in place of every background pixel: fully transparent white
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Trait for per-pixel background classifiers
///
/// Classification looks at one pixel at a time; neighbours and position never
/// matter, so a pixel's verdict is independent of iteration order.
pub trait BackgroundClassifier {
    /// Whether `pixel` belongs to the background
    fn is_background(&self, pixel: &Rgba<u8>) -> bool;
}
