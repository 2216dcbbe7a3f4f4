use crate::output::OutputSink;
use crate::segmentation::{self, BackgroundClassifier};
use crate::source::ImageSource;
use crate::Result;

/// Outcome of one pass over an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalReport {
    pub width: u32,
    pub height: u32,
    /// Pixels classified as background and made transparent
    pub cleared: u64,
}

impl RemovalReport {
    pub fn total_pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Load, clear the background, and write, in that order
///
/// Nothing is written if loading fails.
pub fn run_pipeline<S, O>(
    source: &mut S,
    classifier: &dyn BackgroundClassifier,
    sink: &mut O,
) -> Result<RemovalReport>
where
    S: ImageSource + ?Sized,
    O: OutputSink + ?Sized,
{
    tracing::debug!("Loading {}", source.location().display());
    let mut image = source.load()?;
    let (width, height) = image.dimensions();

    let cleared = segmentation::clear_background(&mut image, classifier);

    tracing::debug!("Writing {}", sink.location().display());
    sink.write_image(&image)?;

    let report = RemovalReport {
        width,
        height,
        cleared,
    };

    tracing::debug!(
        "{}x{}: {} of {} pixels made transparent",
        report.width,
        report.height,
        report.cleared,
        report.total_pixels()
    );

    Ok(report)
}
