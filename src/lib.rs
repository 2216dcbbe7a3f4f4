//! Near-white background removal.
//!
//! Loads an image, makes every pixel whose red, green and blue channels all
//! exceed a threshold fully transparent, and writes the result as RGBA PNG.

mod error;
pub mod output;
pub mod pipeline;
pub mod segmentation;
mod settings;
pub mod source;

pub use error::{Error, Result};
pub use pipeline::{run_pipeline, RemovalReport};
pub use segmentation::{BackgroundClassifier, WhiteThreshold, DEFAULT_THRESHOLD};
pub use settings::{Settings, DEFAULT_INPUT, DEFAULT_OUTPUT};

use std::path::Path;

/// Remove the near-white background of `input_path` and write a PNG to
/// `output_path`
///
/// The input file is never modified.
pub fn remove_background<P, Q>(input_path: P, output_path: Q, threshold: u8) -> Result<RemovalReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let settings = Settings {
        input_path: input_path.as_ref().to_path_buf(),
        output_path: output_path.as_ref().to_path_buf(),
        threshold,
        matte_path: None,
    };
    settings.run()
}
