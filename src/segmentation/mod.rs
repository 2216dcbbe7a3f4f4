mod apply;
mod threshold;
pub mod types;

pub use apply::{clear_background, matte};
pub use threshold::{WhiteThreshold, DEFAULT_THRESHOLD};
pub use types::{BackgroundClassifier, TRANSPARENT};

/// Create the default classifier (near-white threshold)
pub fn create_default_classifier(threshold: u8) -> Box<dyn BackgroundClassifier> {
    let classifier = WhiteThreshold::new(threshold);
    tracing::debug!("Near-white threshold: {}", classifier.threshold());
    Box::new(classifier)
}
