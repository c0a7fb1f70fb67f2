use tracing::{debug, warn};

use crate::consts::DEFAULT_GAIN;
use crate::error::{Result, RetinaError};
use crate::frame::Frame;

use super::config::{Mode, RetinaParams};
use super::dispatch::dispatch;
use super::histogram::draw_histogram;
use super::normalize::{normalize_frame, Sample};
use super::types::{DisplayFrame, PipelineStage, ProcessOutput};

/// Per-frame retina filter engine.
///
/// Holds the tunable [`RetinaParams`]. `process` borrows the processor
/// immutably and works from a copy of the parameters taken when the call
/// starts, so a processor can be shared across threads and reconfigured
/// between calls.
#[derive(Clone, Debug, Default)]
pub struct FrameProcessor {
    params: RetinaParams,
}

impl FrameProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: RetinaParams) -> Self {
        Self {
            params: params.sanitized(),
        }
    }

    /// Update the model parameters. Sigmas below 0.1 are raised to 0.1.
    pub fn configure(&mut self, sigma_excitatory: f32, sigma_inhibitory: f32, gain: f32) {
        self.params = RetinaParams::clamped(sigma_excitatory, sigma_inhibitory, gain);
        debug!(
            sigma_excitatory = self.params.sigma_excitatory,
            sigma_inhibitory = self.params.sigma_inhibitory,
            gain = self.params.gain,
            "Retina parameters updated"
        );
    }

    /// [`configure`](Self::configure) with the default gain of 10.0.
    pub fn configure_default_gain(&mut self, sigma_excitatory: f32, sigma_inhibitory: f32) {
        self.configure(sigma_excitatory, sigma_inhibitory, DEFAULT_GAIN);
    }

    pub fn params(&self) -> RetinaParams {
        self.params
    }

    /// Process one frame in the given mode.
    ///
    /// Never fails. Outcomes:
    /// - no frame: no frame and no histogram;
    /// - input not normalizable: the original input, no histogram;
    /// - filter or retrieval failure: the normalized input, no histogram;
    /// - success: the processed frame and its histogram.
    pub fn process<T: Sample>(&self, frame: Option<&Frame<T>>, mode: Mode) -> ProcessOutput<T> {
        self.run(frame, Some(mode))
    }

    /// Process one frame with a numeric mode selector (0..=3).
    ///
    /// Unknown selectors return the normalized input unchanged.
    pub fn process_index<T: Sample>(&self, frame: Option<&Frame<T>>, index: i64) -> ProcessOutput<T> {
        self.run(frame, Mode::from_index(index))
    }

    fn run<T: Sample>(&self, frame: Option<&Frame<T>>, mode: Option<Mode>) -> ProcessOutput<T> {
        let Some(input) = frame else {
            debug!("No input frame");
            return ProcessOutput::no_signal();
        };
        let params = self.params;

        let normalized = match normalize_frame(input) {
            Ok(f) => f,
            Err(e) => {
                warn!(stage = %PipelineStage::Normalizing, error = %e, "Returning unconverted input");
                return ProcessOutput::degraded(DisplayFrame::Original(input.clone()));
            }
        };

        let processed = match dispatch(&normalized, mode, &params) {
            Ok(f) => f,
            Err(e) => {
                warn!(stage = %PipelineStage::Filtering, ?mode, error = %e, "Returning normalized input");
                return ProcessOutput::degraded(DisplayFrame::Converted(normalized));
            }
        };

        let output = match retrieve(processed, &normalized) {
            Ok(f) => f,
            Err(e) => {
                warn!(stage = %PipelineStage::Retrieving, ?mode, error = %e, "Returning normalized input");
                return ProcessOutput::degraded(DisplayFrame::Converted(normalized));
            }
        };

        let histogram = draw_histogram(Some(&output));
        debug!(
            ?mode,
            width = output.width(),
            height = output.height(),
            channels = output.channels(),
            "Frame processed"
        );
        ProcessOutput {
            frame: Some(DisplayFrame::Converted(output)),
            histogram,
        }
    }
}

/// Turn the filter result into a caller-owned, contiguous frame.
///
/// The spatial size must match the input and the channel count must be 1 or 3.
fn retrieve(processed: Frame, input: &Frame) -> Result<Frame> {
    let got = (processed.height(), processed.width());
    let want = (input.height(), input.width());
    if got != want {
        let mismatch = RetinaError::ShapeMismatch {
            left: got,
            right: want,
        };
        return Err(RetinaError::Retrieval(mismatch.to_string()));
    }
    processed
        .validate_shape()
        .map_err(|e| RetinaError::Retrieval(e.to_string()))?;

    let data = if processed.data.is_standard_layout() {
        processed.data
    } else {
        processed.data.as_standard_layout().into_owned()
    };
    Ok(Frame::new(data))
}
