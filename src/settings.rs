use crate::output::{self, OutputSink, PngFile};
use crate::pipeline::{run_pipeline, RemovalReport};
use crate::segmentation::{self, BackgroundClassifier, DEFAULT_THRESHOLD};
use crate::source::FileSource;
use crate::Result;
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "src/assets/single-petal.png";
pub const DEFAULT_OUTPUT: &str = "src/assets/single-petal-transparent.png";

/// Options for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub threshold: u8,
    /// Also write the grayscale matte here
    pub matte_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            threshold: DEFAULT_THRESHOLD,
            matte_path: None,
        }
    }
}

impl Settings {
    pub fn run(&self) -> Result<RemovalReport> {
        let classifier = segmentation::create_default_classifier(self.threshold);
        let mut source = FileSource::new(&self.input_path);

        let mut sink: Box<dyn OutputSink + '_> = match &self.matte_path {
            Some(matte_path) => Box::new(MattedPng {
                png: PngFile::new(&self.output_path),
                matte_path,
                classifier: classifier.as_ref(),
            }),
            None => Box::new(PngFile::new(&self.output_path)),
        };

        let report = run_pipeline(&mut source, classifier.as_ref(), sink.as_mut())?;
        tracing::info!("Saved transparent image to {}", self.output_path.display());

        Ok(report)
    }
}

/// PNG output that also writes the matte, all or nothing
///
/// The matte is taken from the cleared image. Clearing only turns background
/// into `TRANSPARENT`, which classifies as background whenever anything was
/// cleared, so the verdicts match those on the original pixels.
struct MattedPng<'a> {
    png: PngFile,
    matte_path: &'a Path,
    classifier: &'a dyn BackgroundClassifier,
}

impl OutputSink for MattedPng<'_> {
    fn write_image(&mut self, image: &RgbaImage) -> Result<()> {
        let matte = segmentation::matte(image, self.classifier);

        self.png.write_image(image)?;

        if let Err(err) = output::save_matte(&matte, self.matte_path) {
            // Roll back so a failed run leaves no output behind
            if let Err(remove_err) = fs::remove_file(self.png.location()) {
                tracing::warn!(
                    "Failed to remove {} after matte write failed: {}",
                    self.png.location().display(),
                    remove_err
                );
            }
            return Err(err);
        }

        tracing::debug!("Saved matte to {}", self.matte_path.display());
        Ok(())
    }

    fn location(&self) -> &Path {
        self.png.location()
    }
}
