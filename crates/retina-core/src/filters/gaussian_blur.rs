use ndarray::Array2;

use crate::consts::{GAUSSIAN_RADIUS_SIGMAS, MAX_GAUSSIAN_KERNEL_TAPS};
use crate::error::{Result, RetinaError};

/// Apply Gaussian blur to a float plane using separable 1D convolution.
///
/// Borders are mirrored without repeating the edge sample (`dcb|abcd|cba`).
pub fn gaussian_blur_array(data: &Array2<f32>, sigma: f32) -> Result<Array2<f32>> {
    let kernel = gaussian_kernel(sigma)?;
    let row_pass = convolve_rows(data, &kernel);
    Ok(convolve_cols(&row_pass, &kernel))
}

/// Build a normalized 1D Gaussian kernel for `sigma`.
///
/// The kernel has `round(2 * 4 * sigma + 1) | 1` taps, so it is always odd
/// and at least 3 taps wide. Sigmas whose kernel would exceed
/// `MAX_GAUSSIAN_KERNEL_TAPS` are rejected.
pub fn gaussian_kernel(sigma: f32) -> Result<Vec<f32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(RetinaError::InvalidSigma(sigma));
    }

    let taps = (f64::from(sigma) * f64::from(GAUSSIAN_RADIUS_SIGMAS) * 2.0 + 1.0).round();
    if taps > MAX_GAUSSIAN_KERNEL_TAPS as f64 {
        return Err(RetinaError::InvalidSigma(sigma));
    }
    let size = ((taps as usize) | 1).max(3);
    let radius = size / 2;
    let mut kernel = vec![0.0f32; size];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    Ok(kernel)
}

fn convolve_rows(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_col = reflect_101(col as isize + ki as isize - radius as isize, w);
                sum += data[[row, src_col]] * kv;
            }
            result[[row, col]] = sum;
        }
    }
    result
}

fn convolve_cols(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_row = reflect_101(row as isize + ki as isize - radius as isize, h);
                sum += data[[src_row, col]] * kv;
            }
            result[[row, col]] = sum;
        }
    }
    result
}

/// Map an out-of-range index back into `0..len` by mirror reflection.
fn reflect_101(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let i = index.rem_euclid(period);
    if i >= len as isize {
        (period - i) as usize
    } else {
        i as usize
    }
}
