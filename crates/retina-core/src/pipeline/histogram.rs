use ndarray::{Array2, Array3};
use tracing::warn;

use crate::color::to_gray;
use crate::consts::{
    COLOR_CHANNEL_COUNT, EPSILON, HISTOGRAM_BASELINE_COLOR, HISTOGRAM_BASELINE_ROW,
    HISTOGRAM_BINS, HISTOGRAM_HEIGHT, HISTOGRAM_LINE_COLOR, HISTOGRAM_WIDTH,
};
use crate::error::Result;
use crate::frame::Frame;

use super::types::PipelineStage;

/// Count gray intensities into 256 bins.
pub fn intensity_histogram(gray: &Array2<u8>) -> [u32; HISTOGRAM_BINS] {
    let mut bins = [0u32; HISTOGRAM_BINS];
    for &v in gray.iter() {
        bins[v as usize] += 1;
    }
    bins
}

/// Scale bin counts so the smallest maps to 0 and the largest to `height`.
///
/// If every bin holds the same count, all heights are 0.
pub fn normalize_bins(bins: &[u32; HISTOGRAM_BINS], height: f32) -> [f32; HISTOGRAM_BINS] {
    let min = bins.iter().copied().min().unwrap_or(0) as f32;
    let max = bins.iter().copied().max().unwrap_or(0) as f32;
    let range = max - min;
    let scale = if range > EPSILON { height / range } else { 0.0 };

    let mut heights = [0.0f32; HISTOGRAM_BINS];
    for (h, &count) in heights.iter_mut().zip(bins.iter()) {
        *h = (count as f32 - min) * scale;
    }
    heights
}

/// Render the gray-level distribution of `frame` onto a 100x256 canvas.
///
/// The canvas is black with a gray reference line at mid-height and a green
/// polyline with one vertex per bin at `(bin, 100 - height)`. Vertices of
/// empty bins sit on row 100, just below the canvas, and are clipped.
pub fn render_histogram(frame: &Frame) -> Result<Frame> {
    let gray = to_gray(frame)?;
    let heights = normalize_bins(&intensity_histogram(&gray), HISTOGRAM_HEIGHT as f32);

    let mut canvas = Array3::<u8>::zeros((HISTOGRAM_HEIGHT, HISTOGRAM_WIDTH, COLOR_CHANNEL_COUNT));
    let baseline = HISTOGRAM_BASELINE_ROW as isize;
    draw_line(
        &mut canvas,
        (0, baseline),
        (HISTOGRAM_WIDTH as isize, baseline),
        HISTOGRAM_BASELINE_COLOR,
    );

    let points: Vec<(isize, isize)> = heights
        .iter()
        .enumerate()
        .map(|(i, &h)| (i as isize, HISTOGRAM_HEIGHT as isize - h as isize))
        .collect();
    for segment in points.windows(2) {
        draw_line(&mut canvas, segment[0], segment[1], HISTOGRAM_LINE_COLOR);
    }

    Ok(Frame::new(canvas))
}

/// Histogram image for an optional frame. Failures are logged and yield `None`.
pub fn draw_histogram(frame: Option<&Frame>) -> Option<Frame> {
    let frame = frame?;
    match render_histogram(frame) {
        Ok(hist) => Some(hist),
        Err(e) => {
            warn!(stage = %PipelineStage::Histogram, error = %e, "Histogram unavailable");
            None
        }
    }
}

/// 1-pixel Bresenham line from `p0` to `p1` (both `(x, y)`), clipped to the canvas.
fn draw_line(canvas: &mut Array3<u8>, p0: (isize, isize), p1: (isize, isize), color: [u8; 3]) {
    let (h, w, _) = canvas.dim();
    let (mut x, mut y) = p0;
    let (x1, y1) = p1;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
            for (ch, &v) in color.iter().enumerate() {
                canvas[[y as usize, x as usize, ch]] = v;
            }
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
