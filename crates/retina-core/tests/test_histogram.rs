mod common;

use ndarray::Array2;

use retina_core::consts::{HISTOGRAM_BASELINE_COLOR, HISTOGRAM_LINE_COLOR};
use retina_core::frame::Frame;
use retina_core::pipeline::{
    draw_histogram, intensity_histogram, normalize_bins, render_histogram, FrameProcessor, Mode,
};

use common::{color_frame, gray_frame};

fn green_columns(hist: &Frame) -> Vec<usize> {
    let mut cols = Vec::new();
    for col in 0..hist.width() {
        if (0..hist.height()).any(|row| hist.bgr_at(row, col) == HISTOGRAM_LINE_COLOR) {
            cols.push(col);
        }
    }
    cols
}

#[test]
fn test_intensity_histogram_counts_every_pixel() {
    let gray = Array2::from_shape_fn((10, 13), |(r, c)| ((r * 13 + c) % 256) as u8);
    let bins = intensity_histogram(&gray);
    assert_eq!(bins.iter().map(|&b| b as usize).sum::<usize>(), 130);
    assert_eq!(bins[0], 1);
    assert_eq!(bins[129], 1);
    assert_eq!(bins[200], 0);
}

#[test]
fn test_normalize_bins_scales_to_height() {
    let mut bins = [0u32; 256];
    bins[10] = 50;
    bins[20] = 25;
    let heights = normalize_bins(&bins, 100.0);
    assert_eq!(heights[10], 100.0);
    assert_eq!(heights[20], 50.0);
    assert_eq!(heights[0], 0.0);
}

#[test]
fn test_normalize_bins_equal_counts_are_flat() {
    let bins = [7u32; 256];
    assert!(normalize_bins(&bins, 100.0).iter().all(|&h| h == 0.0));
}

#[test]
fn test_canvas_is_fixed_size_regardless_of_input() {
    for (h, w) in [(3, 3), (40, 17), (120, 300)] {
        let hist = render_histogram(&gray_frame(h, w, 100)).unwrap();
        assert_eq!((hist.height(), hist.width(), hist.channels()), (100, 256, 3));
    }
}

#[test]
fn test_baseline_drawn_at_mid_height() {
    let hist = render_histogram(&gray_frame(8, 8, 30)).unwrap();
    let baseline_px = (0..256)
        .filter(|&col| hist.bgr_at(50, col) == HISTOGRAM_BASELINE_COLOR)
        .count();
    // The polyline only crosses row 50 near bin 30.
    assert!(baseline_px >= 250, "baseline pixels: {baseline_px}");
    assert_eq!(hist.bgr_at(10, 200), [0, 0, 0]);
}

#[test]
fn test_narrow_intensity_range_concentrates_polyline() {
    let frame = Frame::from_gray(Array2::from_shape_fn((10, 10), |(r, c)| {
        118 + ((r * 10 + c) % 5) as u8
    }));
    let hist = render_histogram(&frame).unwrap();
    let cols = green_columns(&hist);

    assert!(!cols.is_empty());
    assert!(
        cols.iter().all(|&c| (116..=124).contains(&c)),
        "polyline strayed outside the occupied bins: {cols:?}"
    );
    // The tallest bins reach the top of the canvas.
    assert!((118..=122).any(|c| hist.bgr_at(0, c) == HISTOGRAM_LINE_COLOR));
}

#[test]
fn test_color_input_is_reduced_to_gray() {
    // BGR (0, 0, 255) has luminance 76.
    let hist = render_histogram(&color_frame(6, 6, [0, 0, 255])).unwrap();
    assert_eq!(hist.bgr_at(0, 76), HISTOGRAM_LINE_COLOR);
    let cols = green_columns(&hist);
    assert!(cols.iter().all(|&c| (75..=77).contains(&c)), "{cols:?}");
}

#[test]
fn test_draw_histogram_absent_and_invalid_inputs() {
    assert!(draw_histogram(None).is_none());
    let bad = Frame::filled(4, 4, 2, 9u8);
    assert!(render_histogram(&bad).is_err());
    assert!(draw_histogram(Some(&bad)).is_none());
}

#[test]
fn test_histogram_describes_processed_frame_not_input() {
    let processor = FrameProcessor::new();
    let input = gray_frame(12, 12, 200);

    let passthrough = processor.process(Some(&input), Mode::PassThrough);
    let edges = processor.process(Some(&input), Mode::EdgePathway);

    // Pass-through keeps every pixel at 200; the flat edge map is all 0.
    let hist_pass = passthrough.histogram.unwrap();
    let hist_edge = edges.histogram.unwrap();
    assert_eq!(hist_pass.bgr_at(0, 200), HISTOGRAM_LINE_COLOR);
    assert_eq!(hist_edge.bgr_at(0, 0), HISTOGRAM_LINE_COLOR);
    assert_ne!(hist_pass, hist_edge);
}
