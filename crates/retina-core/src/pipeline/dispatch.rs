use ndarray::Array2;
use tracing::debug;

use crate::color::{gray_to_bgr, to_gray};
use crate::consts::{EDGE_HIGH_THRESHOLD, EDGE_LOW_THRESHOLD};
use crate::error::Result;
use crate::filters::canny::canny;
use crate::frame::Frame;

use super::config::{Mode, RetinaParams};
use super::ganglion::ganglion_response;

/// Route a normalized frame to one filter strategy.
///
/// `None` means no strategy matched the selector; the input is returned
/// unchanged.
pub fn dispatch(frame: &Frame, mode: Option<Mode>, params: &RetinaParams) -> Result<Frame> {
    let processed = match mode {
        Some(Mode::PassThrough) | Some(Mode::AdaptiveContrast) => Some(frame.clone()),
        Some(Mode::EdgePathway) => Some(edge_pathway(&to_gray(frame)?)),
        Some(Mode::GanglionDoG) => Some(ganglion_response(&to_gray(frame)?, params)?),
        None => None,
    };

    Ok(processed.unwrap_or_else(|| {
        debug!("No filter strategy selected, returning input");
        frame.clone()
    }))
}

/// Canny edge map (thresholds 100/200) as a three-channel frame.
pub fn edge_pathway(gray: &Array2<u8>) -> Frame {
    let edges = canny(gray, EDGE_LOW_THRESHOLD, EDGE_HIGH_THRESHOLD);
    gray_to_bgr(&edges)
}
