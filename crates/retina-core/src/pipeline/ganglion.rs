use ndarray::Array2;
use tracing::debug;

use crate::color::{apply_colormap, Colormap};
use crate::error::{Result, RetinaError};
use crate::filters::gaussian_blur::gaussian_blur_array;
use crate::filters::normalize::{convert_scale_abs, min_max_normalize, to_f32};
use crate::frame::Frame;

use super::config::RetinaParams;

/// Simulate a ganglion cell layer and render it as a jet heatmap.
///
/// Pipeline: rescale gray to [0, 1] -> center blur (sigma_excitatory) and
/// surround blur (sigma_inhibitory) -> difference -> rescale to [0, 255] ->
/// magnitude as u8 -> jet palette. The rescaling is relative to the frame's
/// own range, so output contrast follows the scene.
pub fn ganglion_response(gray: &Array2<u8>, params: &RetinaParams) -> Result<Frame> {
    let response = dog_response(gray, params)?;
    Ok(apply_colormap(&response, Colormap::Jet))
}

/// The 8-bit center-surround response before colorization.
///
/// Polarity is discarded: On and Off responses both land in the same
/// magnitude scale.
pub fn dog_response(gray: &Array2<u8>, params: &RetinaParams) -> Result<Array2<u8>> {
    let dog = difference_of_gaussians(gray, params.sigma_excitatory, params.sigma_inhibitory)?;
    let rescaled = min_max_normalize(&dog, 0.0, 255.0);
    Ok(convert_scale_abs(&rescaled))
}

/// Signed difference `G(sigma_center) - G(sigma_surround)` of the
/// [0, 1]-rescaled plane. Negative values are inhibition.
pub fn difference_of_gaussians(
    gray: &Array2<u8>,
    sigma_center: f32,
    sigma_surround: f32,
) -> Result<Array2<f32>> {
    let unit = min_max_normalize(&to_f32(gray), 0.0, 1.0);
    let center = gaussian_blur_array(&unit, sigma_center)?;
    let surround = gaussian_blur_array(&unit, sigma_surround)?;

    if center.dim() != surround.dim() {
        return Err(RetinaError::ShapeMismatch {
            left: center.dim(),
            right: surround.dim(),
        });
    }

    debug!(sigma_center, sigma_surround, "Computed center and surround blurs");
    Ok(center - surround)
}
