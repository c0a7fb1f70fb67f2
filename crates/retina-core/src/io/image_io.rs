use std::path::Path;

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use ndarray::Array3;

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, RetinaError};
use crate::frame::Frame;

/// Load an image file into a frame.
///
/// Color images become three-channel BGR frames; gray images become
/// single-channel frames. Deeper formats are reduced to 8 bits by the
/// decoder.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    Ok(frame_from_image(&img))
}

/// Save a frame, choosing the format from the file extension.
pub fn save_frame(frame: &Frame, path: &Path) -> Result<()> {
    frame_to_image(frame)?.save(path)?;
    Ok(())
}

/// Convert a decoded image into a frame.
pub fn frame_from_image(img: &DynamicImage) -> Frame {
    if img.color().has_color() {
        let rgb = img.to_rgb8();
        let (w, h) = rgb.dimensions();
        Frame::new(Array3::from_shape_fn(
            (h as usize, w as usize, COLOR_CHANNEL_COUNT),
            |(row, col, ch)| rgb.get_pixel(col as u32, row as u32).0[2 - ch],
        ))
    } else {
        let gray = img.to_luma8();
        let (w, h) = gray.dimensions();
        Frame::new(Array3::from_shape_fn(
            (h as usize, w as usize, 1),
            |(row, col, _)| gray.get_pixel(col as u32, row as u32).0[0],
        ))
    }
}

/// Convert a frame into an image for encoding. BGR channels are written as RGB.
pub fn frame_to_image(frame: &Frame) -> Result<DynamicImage> {
    frame.validate_shape()?;
    let (h, w) = (frame.height(), frame.width());
    let (w32, h32) = dimensions_u32(w, h)?;

    if frame.is_color() {
        let mut img = RgbImage::new(w32, h32);
        for row in 0..h {
            for col in 0..w {
                let [b, g, r] = frame.bgr_at(row, col);
                img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
            }
        }
        Ok(DynamicImage::ImageRgb8(img))
    } else {
        let mut img = GrayImage::new(w32, h32);
        for row in 0..h {
            for col in 0..w {
                img.put_pixel(col as u32, row as u32, Luma([frame.data[[row, col, 0]]]));
            }
        }
        Ok(DynamicImage::ImageLuma8(img))
    }
}

fn dimensions_u32(width: usize, height: usize) -> Result<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(RetinaError::InvalidDimensions { width, height }),
    }
}
