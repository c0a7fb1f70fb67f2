use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GAIN, DEFAULT_SIGMA_EXCITATORY, DEFAULT_SIGMA_INHIBITORY, MIN_SIGMA};

/// Tunable parameters of the ganglion model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RetinaParams {
    /// Center (narrow) Gaussian sigma in pixels.
    #[serde(default = "default_sigma_excitatory")]
    pub sigma_excitatory: f32,
    /// Surround (wide) Gaussian sigma in pixels.
    #[serde(default = "default_sigma_inhibitory")]
    pub sigma_inhibitory: f32,
    /// Response gain. Carried with the parameters, not applied by any mode.
    #[serde(default = "default_gain")]
    pub gain: f32,
}

fn default_sigma_excitatory() -> f32 {
    DEFAULT_SIGMA_EXCITATORY
}
fn default_sigma_inhibitory() -> f32 {
    DEFAULT_SIGMA_INHIBITORY
}
fn default_gain() -> f32 {
    DEFAULT_GAIN
}

impl Default for RetinaParams {
    fn default() -> Self {
        Self {
            sigma_excitatory: DEFAULT_SIGMA_EXCITATORY,
            sigma_inhibitory: DEFAULT_SIGMA_INHIBITORY,
            gain: DEFAULT_GAIN,
        }
    }
}

impl RetinaParams {
    /// Build parameters with both sigmas raised to at least `MIN_SIGMA`.
    ///
    /// A NaN sigma also resolves to `MIN_SIGMA`. The gain is stored as given.
    pub fn clamped(sigma_excitatory: f32, sigma_inhibitory: f32, gain: f32) -> Self {
        Self {
            sigma_excitatory: sigma_excitatory.max(MIN_SIGMA),
            sigma_inhibitory: sigma_inhibitory.max(MIN_SIGMA),
            gain,
        }
    }

    /// Re-apply the sigma floor, e.g. after deserializing from a file.
    pub fn sanitized(self) -> Self {
        Self::clamped(self.sigma_excitatory, self.sigma_inhibitory, self.gain)
    }
}

/// Filter strategy applied to each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Normalized input, unchanged.
    PassThrough,
    /// Reserved for contrast enhancement; currently identical to `PassThrough`.
    AdaptiveContrast,
    /// Binary Canny edge map, replicated into three channels.
    EdgePathway,
    /// Difference-of-Gaussians center-surround response, jet colorized.
    #[default]
    GanglionDoG,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::PassThrough,
        Mode::AdaptiveContrast,
        Mode::EdgePathway,
        Mode::GanglionDoG,
    ];

    /// Numeric selector used by display front-ends (0..=3).
    pub fn index(&self) -> usize {
        match self {
            Self::PassThrough => 0,
            Self::AdaptiveContrast => 1,
            Self::EdgePathway => 2,
            Self::GanglionDoG => 3,
        }
    }

    /// Inverse of [`Mode::index`]. Unknown selectors yield `None`.
    pub fn from_index(index: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.index() as i64 == index)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PassThrough => write!(f, "Pass-Through"),
            Self::AdaptiveContrast => write!(f, "Adaptive Contrast"),
            Self::EdgePathway => write!(f, "Edge Pathway"),
            Self::GanglionDoG => write!(f, "Ganglion DoG"),
        }
    }
}

/// A saved processing session: which mode to run with which parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub params: RetinaParams,
}
