use super::types::{BackgroundClassifier, TRANSPARENT};
use image::{GrayImage, Luma, RgbaImage};

/// Rewrite every background pixel to transparent white, in place
///
/// Foreground pixels, alpha included, are left untouched. Returns the number
/// of pixels that were classified as background.
pub fn clear_background(image: &mut RgbaImage, classifier: &dyn BackgroundClassifier) -> u64 {
    let _span = tracing::debug_span!("classify").entered();

    let mut cleared = 0u64;
    for pixel in image.pixels_mut() {
        if classifier.is_background(pixel) {
            *pixel = TRANSPARENT;
            cleared += 1;
        }
    }

    tracing::debug!(
        "Cleared {} of {} pixels",
        cleared,
        image.width() as u64 * image.height() as u64
    );

    cleared
}

/// Build a grayscale matte: 255 for foreground, 0 for background
///
/// Dimensions match the input image.
pub fn matte(image: &RgbaImage, classifier: &dyn BackgroundClassifier) -> GrayImage {
    let _span = tracing::debug_span!("matte").entered();

    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        if classifier.is_background(image.get_pixel(x, y)) {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}
