use ndarray::{Array2, Array3, ArrayView2, Axis};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, RetinaError};

/// A single image frame.
///
/// Samples are stored row-major with shape `(height, width, channels)`.
/// Color frames carry three channels in B, G, R order; gray frames carry one.
/// The sample type defaults to `u8`, the only type the filters operate on.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<T = u8> {
    pub data: Array3<T>,
}

impl<T> Frame<T> {
    pub fn new(data: Array3<T>) -> Self {
        Self { data }
    }

    /// Wrap a 2D array as a single-channel frame.
    pub fn from_gray(data: Array2<T>) -> Self {
        Self {
            data: data.insert_axis(Axis(2)),
        }
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    pub fn is_color(&self) -> bool {
        self.channels() == COLOR_CHANNEL_COUNT
    }

    /// Check that the frame is non-empty and has 1 or 3 channels.
    pub fn validate_shape(&self) -> Result<()> {
        let (h, w, c) = self.data.dim();
        if h == 0 || w == 0 {
            return Err(RetinaError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        if c != 1 && c != COLOR_CHANNEL_COUNT {
            return Err(RetinaError::UnsupportedChannels(c));
        }
        Ok(())
    }
}

impl<T: Clone> Frame<T> {
    /// Build a frame filled with a single value.
    pub fn filled(height: usize, width: usize, channels: usize, value: T) -> Self {
        Self::new(Array3::from_elem((height, width, channels), value))
    }
}

impl Frame<u8> {
    /// View of one channel as a 2D array.
    pub fn channel(&self, index: usize) -> ArrayView2<'_, u8> {
        self.data.index_axis(Axis(2), index)
    }

    /// Pixel at `(row, col)` as a BGR triple. Gray frames repeat their value.
    pub fn bgr_at(&self, row: usize, col: usize) -> [u8; 3] {
        if self.is_color() {
            [
                self.data[[row, col, 0]],
                self.data[[row, col, 1]],
                self.data[[row, col, 2]],
            ]
        } else {
            let v = self.data[[row, col, 0]];
            [v, v, v]
        }
    }
}
