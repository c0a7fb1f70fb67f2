use ndarray::Array2;

use crate::consts::EPSILON;

/// Linearly rescale a plane so its minimum maps to `lo` and its maximum to `hi`.
///
/// A flat plane (max - min below `EPSILON`) maps entirely to `lo`.
pub fn min_max_normalize(data: &Array2<f32>, lo: f32, hi: f32) -> Array2<f32> {
    if data.is_empty() {
        return data.clone();
    }
    let (min, max) = min_max(data);
    let range = max - min;
    let scale = if range > EPSILON { (hi - lo) / range } else { 0.0 };
    data.mapv(|v| (v - min) * scale + lo)
}

/// Absolute value, rounded and saturated to `u8`.
pub fn convert_scale_abs(data: &Array2<f32>) -> Array2<u8> {
    data.mapv(|v| v.abs().round().clamp(0.0, 255.0) as u8)
}

/// Widen an 8-bit plane to f32 without rescaling.
pub fn to_f32(data: &Array2<u8>) -> Array2<f32> {
    data.mapv(f32::from)
}

/// Global (min, max) of a non-empty plane.
pub fn min_max(data: &Array2<f32>) -> (f32, f32) {
    data.iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
