use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use retina_core::frame::Frame;
use retina_core::io::image_io::{load_frame, save_frame};
use retina_core::pipeline::{DisplayFrame, FrameProcessor, ProcessOutput};
use tracing::info;

use super::session::SessionArgs;
use crate::summary::{print_process_summary, OutcomeKind};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub session: SessionArgs,

    /// Output file path
    #[arg(short, long, default_value = "retina.png")]
    pub output: PathBuf,

    /// Also write the intensity histogram to this path
    #[arg(long)]
    pub histogram: Option<PathBuf>,
}

pub fn run(args: &ProcessArgs) -> Result<()> {
    let session = args.session.resolve()?;
    let processor = FrameProcessor::with_params(session.params);

    let input = load_frame(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!(
        "Loaded {}x{} ({} channel{})",
        input.width(),
        input.height(),
        input.channels(),
        if input.channels() == 1 { "" } else { "s" }
    );

    info!(mode = %session.mode, params = ?session.params, "Processing frame");
    let output = processor.process(Some(&input), session.mode);
    let written = write_output(output, &args.output, args.histogram.as_deref())?;

    print_process_summary(&session, &args.file, &args.output, &written);
    Ok(())
}

/// What one processed frame produced on disk.
pub struct Written {
    pub outcome: OutcomeKind,
    pub histogram: Option<PathBuf>,
}

/// Save the display frame and, if asked and available, its histogram.
pub fn write_output(
    output: ProcessOutput,
    frame_path: &Path,
    histogram_path: Option<&Path>,
) -> Result<Written> {
    let outcome = OutcomeKind::of(&output);
    let frame: Frame = match output.frame {
        Some(DisplayFrame::Converted(f)) | Some(DisplayFrame::Original(f)) => f,
        None => bail!("No frame produced"),
    };
    save_frame(&frame, frame_path)
        .with_context(|| format!("Failed to write {}", frame_path.display()))?;

    let histogram = match (histogram_path, output.histogram) {
        (Some(path), Some(hist)) => {
            save_frame(&hist, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Some(path.to_path_buf())
        }
        _ => None,
    };

    Ok(Written { outcome, histogram })
}

#[cfg(test)]
mod tests {
    use super::*;
    use retina_core::pipeline::Mode;

    #[test]
    fn writes_frame_and_histogram() {
        let dir = tempfile::tempdir().unwrap();
        let frame_path = dir.path().join("out.png");
        let hist_path = dir.path().join("hist.png");

        let input = Frame::filled(8, 8, 3, 120u8);
        let output = FrameProcessor::new().process(Some(&input), Mode::GanglionDoG);
        let written = write_output(output, &frame_path, Some(&hist_path)).unwrap();

        assert_eq!(written.outcome, OutcomeKind::Processed);
        assert_eq!(written.histogram.as_deref(), Some(hist_path.as_path()));
        assert!(frame_path.exists());
        assert!(hist_path.exists());
    }

    #[test]
    fn degraded_output_skips_histogram() {
        let dir = tempfile::tempdir().unwrap();
        let frame_path = dir.path().join("out.png");
        let hist_path = dir.path().join("hist.png");

        let output = ProcessOutput::degraded(DisplayFrame::Converted(Frame::filled(4, 4, 1, 9u8)));
        let written = write_output(output, &frame_path, Some(&hist_path)).unwrap();

        assert_eq!(written.outcome, OutcomeKind::Degraded);
        assert!(written.histogram.is_none());
        assert!(frame_path.exists());
        assert!(!hist_path.exists());
    }

    #[test]
    fn no_signal_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_output(ProcessOutput::no_signal(), &dir.path().join("x.png"), None);
        assert!(result.is_err());
    }
}
