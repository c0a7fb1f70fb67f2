#![allow(dead_code)]

use ndarray::{Array2, Array3};
use retina_core::frame::Frame;

/// Single-channel frame filled with one value.
pub fn gray_frame(h: usize, w: usize, fill: u8) -> Frame {
    Frame::filled(h, w, 1, fill)
}

/// Three-channel frame filled with one BGR triple.
pub fn color_frame(h: usize, w: usize, bgr: [u8; 3]) -> Frame {
    Frame::new(Array3::from_shape_fn((h, w, 3), |(_, _, ch)| bgr[ch]))
}

/// Gray frame with `left` in columns `< boundary` and `right` from `boundary` on.
pub fn vertical_step(h: usize, w: usize, boundary: usize, left: u8, right: u8) -> Frame {
    Frame::from_gray(Array2::from_shape_fn((h, w), |(_, col)| {
        if col < boundary {
            left
        } else {
            right
        }
    }))
}

/// Black gray frame with a white square of side `side` in the middle.
pub fn bright_square(size: usize, side: usize) -> Frame {
    let start = (size - side) / 2;
    let end = start + side;
    Frame::from_gray(Array2::from_shape_fn((size, size), |(row, col)| {
        if (start..end).contains(&row) && (start..end).contains(&col) {
            255
        } else {
            0
        }
    }))
}

/// Color frame with a different pattern in each channel.
pub fn textured_color(h: usize, w: usize) -> Frame {
    Frame::new(Array3::from_shape_fn((h, w, 3), |(row, col, ch)| {
        ((row * 7 + col * 13 + ch * 60) % 256) as u8
    }))
}

/// Every distinct BGR triple appearing in `frame`.
pub fn distinct_pixels(frame: &Frame) -> Vec<[u8; 3]> {
    let mut seen: Vec<[u8; 3]> = Vec::new();
    for row in 0..frame.height() {
        for col in 0..frame.width() {
            let px = frame.bgr_at(row, col);
            if !seen.contains(&px) {
                seen.push(px);
            }
        }
    }
    seen
}
