use ndarray::{Array2, Array3};

use crate::consts::{COLOR_CHANNEL_COUNT, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::error::{Result, RetinaError};
use crate::frame::Frame;

/// Reduce a frame to a single gray plane.
///
/// Three-channel frames are read in B, G, R order and weighted with the
/// BT.601 luminance coefficients; the result is rounded to the nearest
/// integer. Single-channel frames are copied as-is.
pub fn to_gray(frame: &Frame) -> Result<Array2<u8>> {
    match frame.channels() {
        1 => Ok(frame.channel(0).to_owned()),
        COLOR_CHANNEL_COUNT => {
            let (h, w, _) = frame.data.dim();
            let mut gray = Array2::<u8>::zeros((h, w));
            for row in 0..h {
                for col in 0..w {
                    let b = frame.data[[row, col, 0]] as f32;
                    let g = frame.data[[row, col, 1]] as f32;
                    let r = frame.data[[row, col, 2]] as f32;
                    let y = LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b;
                    gray[[row, col]] = y.round().clamp(0.0, 255.0) as u8;
                }
            }
            Ok(gray)
        }
        other => Err(RetinaError::UnsupportedChannels(other)),
    }
}

/// Replicate a gray plane into all three channels of a color frame.
pub fn gray_to_bgr(gray: &Array2<u8>) -> Frame {
    let (h, w) = gray.dim();
    Frame::new(Array3::from_shape_fn((h, w, COLOR_CHANNEL_COUNT), |(row, col, _)| {
        gray[[row, col]]
    }))
}
