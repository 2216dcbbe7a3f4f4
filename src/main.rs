use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use whiteout::{Settings, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_THRESHOLD};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input image (any format the decoder recognizes)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Pixels with red, green and blue all above this value become transparent
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Also write the foreground matte (white = kept, black = cleared)
    #[arg(long)]
    matte: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Settings {
            input_path: args.input,
            output_path: args.output,
            threshold: args.threshold,
            matte_path: args.matte,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let settings = Settings::from(args);

    tracing::debug!("Input: {}", settings.input_path.display());
    tracing::debug!("Output: {}", settings.output_path.display());
    tracing::debug!("Threshold: {}", settings.threshold);

    let report = settings
        .run()
        .with_context(|| format!("Failed to remove background from {}", settings.input_path.display()))?;

    tracing::debug!(
        "Cleared {} of {} pixels",
        report.cleared,
        report.total_pixels()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_keeps_original_paths() {
        let args = Args::try_parse_from(["whiteout"]).unwrap();
        assert_eq!(Settings::from(args), Settings::default());
    }

    #[test]
    fn threshold_outside_byte_range_is_rejected() {
        assert!(Args::try_parse_from(["whiteout", "--threshold", "256"]).is_err());
        assert!(Args::try_parse_from(["whiteout", "-t", "-1"]).is_err());
    }

    #[test]
    fn flags_map_onto_settings() {
        let args = Args::try_parse_from([
            "whiteout", "-i", "a.jpg", "-o", "b.png", "-t", "200", "--matte", "m.png",
        ])
        .unwrap();
        let settings = Settings::from(args);
        assert_eq!(settings.input_path, PathBuf::from("a.jpg"));
        assert_eq!(settings.output_path, PathBuf::from("b.png"));
        assert_eq!(settings.threshold, 200);
        assert_eq!(settings.matte_path, Some(PathBuf::from("m.png")));
    }
}
