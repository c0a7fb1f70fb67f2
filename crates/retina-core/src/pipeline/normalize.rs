use num_traits::ToPrimitive;

use crate::error::Result;
use crate::frame::Frame;

/// A numeric sample type that can be brought into the 8-bit range.
pub trait Sample: Copy + ToPrimitive {
    /// Truncate toward zero and saturate into [0, 255]. NaN maps to 0.
    fn to_u8_saturating(self) -> u8 {
        self.to_f64()
            .map_or(0, |v| v.trunc().clamp(0.0, 255.0) as u8)
    }
}

impl<T: Copy + ToPrimitive> Sample for T {}

/// Produce an 8-bit copy of `frame` suitable for filtering.
///
/// Fails when the frame is empty or its channel count is not 1 or 3.
/// The input is never modified.
pub fn normalize_frame<T: Sample>(frame: &Frame<T>) -> Result<Frame> {
    frame.validate_shape()?;
    Ok(Frame::new(frame.data.mapv(Sample::to_u8_saturating)))
}
