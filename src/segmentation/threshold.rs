use super::types::BackgroundClassifier;
use image::Rgba;

/// Default cutoff above which a channel counts as near white
pub const DEFAULT_THRESHOLD: u8 = 240;

/// Near-white classifier
///
/// A pixel is background when its red, green and blue channels are all
/// strictly greater than the threshold. Alpha is ignored. Bright non-white
/// colors with every channel above the cutoff (pale yellow, say) are
/// background too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhiteThreshold {
    threshold: u8,
}

impl WhiteThreshold {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}

impl Default for WhiteThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl BackgroundClassifier for WhiteThreshold {
    fn is_background(&self, pixel: &Rgba<u8>) -> bool {
        let [r, g, b, _] = pixel.0;
        r > self.threshold && g > self.threshold && b > self.threshold
    }
}
