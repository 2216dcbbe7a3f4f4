use image::{Rgb, RgbImage};

/// Generates an RGB image with a white border around a dark square,
/// roughly what a product shot on a white backdrop looks like.
pub fn framed_square_rgb(width: u32, height: u32, border: u32) -> RgbImage {
    assert!(width > 2 * border && height > 2 * border, "border too wide");

    RgbImage::from_fn(width, height, |x, y| {
        let inside = x >= border && x < width - border && y >= border && y < height - border;
        if inside {
            Rgb([180, 40, 90])
        } else {
            Rgb([250, 252, 255])
        }
    })
}
