use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use retina_core::io::image_io::load_frame;
use retina_core::pipeline::{FrameProcessor, Mode};
use tracing::{info, warn};

use super::process::{write_output, Written};
use super::session::{mode_slug, SessionArgs};
use crate::summary::{print_batch_summary, BatchTally};

#[derive(Args)]
pub struct BatchArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub session: SessionArgs,

    /// Directory for the processed images
    #[arg(short, long, default_value = "retina-out")]
    pub output_dir: PathBuf,

    /// Write a histogram image next to each output
    #[arg(long)]
    pub histograms: bool,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let session = args.session.resolve()?;
    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("Failed to create output directory {}", args.output_dir.display())
    })?;

    let processor = FrameProcessor::with_params(session.params);
    info!(
        files = args.files.len(),
        threads = rayon::current_num_threads(),
        "Starting batch"
    );
    println!(
        "Processing {} files with {}...",
        args.files.len(),
        session.mode
    );

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Filtering [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let results: Vec<(PathBuf, Result<Written>)> = args
        .files
        .par_iter()
        .map(|file| {
            let result = process_one(&processor, session.mode, file, args);
            pb.inc(1);
            (file.clone(), result)
        })
        .collect();
    pb.finish();

    let mut tally = BatchTally::default();
    for (file, result) in &results {
        match result {
            Ok(written) => tally.record(written.outcome),
            Err(e) => {
                warn!(file = %file.display(), error = %e, "Skipping file");
                tally.failed += 1;
            }
        }
    }

    print_batch_summary(&tally, &args.output_dir);
    Ok(())
}

fn process_one(
    processor: &FrameProcessor,
    mode: Mode,
    file: &Path,
    args: &BatchArgs,
) -> Result<Written> {
    let input =
        load_frame(file).with_context(|| format!("Failed to load {}", file.display()))?;
    let output = processor.process(Some(&input), mode);

    let (frame_path, hist_path) = output_paths(&args.output_dir, file, mode);
    let hist_path = args.histograms.then_some(hist_path);
    write_output(output, &frame_path, hist_path.as_deref())
}

/// `<dir>/<stem>_<mode>.png` and `<dir>/<stem>_<mode>_hist.png`.
fn output_paths(dir: &Path, file: &Path, mode: Mode) -> (PathBuf, PathBuf) {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let slug = mode_slug(mode);
    (
        dir.join(format!("{stem}_{slug}.png")),
        dir.join(format!("{stem}_{slug}_hist.png")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths_use_stem_and_mode() {
        let (frame, hist) = output_paths(
            Path::new("/tmp/out"),
            Path::new("shots/moon.jpg"),
            Mode::EdgePathway,
        );
        assert_eq!(frame, PathBuf::from("/tmp/out/moon_edges.png"));
        assert_eq!(hist, PathBuf::from("/tmp/out/moon_edges_hist.png"));
    }
}
