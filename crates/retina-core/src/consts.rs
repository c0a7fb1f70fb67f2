/// Smallest blur scale accepted by `FrameProcessor::configure`.
pub const MIN_SIGMA: f32 = 0.1;

/// Default center (excitatory) Gaussian sigma.
pub const DEFAULT_SIGMA_EXCITATORY: f32 = 1.0;

/// Default surround (inhibitory) Gaussian sigma.
pub const DEFAULT_SIGMA_INHIBITORY: f32 = 2.0;

/// Default gain. Stored with the parameters but not consumed by any filter.
pub const DEFAULT_GAIN: f32 = 10.0;

/// Canny low hysteresis threshold on the 0-255 intensity scale.
pub const EDGE_LOW_THRESHOLD: f32 = 100.0;

/// Canny high hysteresis threshold on the 0-255 intensity scale.
pub const EDGE_HIGH_THRESHOLD: f32 = 200.0;

/// Gaussian kernel half-width in sigmas for float images.
pub const GAUSSIAN_RADIUS_SIGMAS: f32 = 4.0;

/// Longest Gaussian kernel built; sigmas needing more taps are rejected.
pub const MAX_GAUSSIAN_KERNEL_TAPS: usize = 8193;

/// Small epsilon to avoid division by zero in min-max normalization.
pub const EPSILON: f32 = 1e-10;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Number of channels in a color frame (B, G, R).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Number of intensity bins in the histogram.
pub const HISTOGRAM_BINS: usize = 256;

/// Histogram canvas width in pixels (one column per bin).
pub const HISTOGRAM_WIDTH: usize = 256;

/// Histogram canvas height in pixels; bin heights are scaled into [0, this].
pub const HISTOGRAM_HEIGHT: usize = 100;

/// Row of the horizontal reference line on the histogram canvas.
pub const HISTOGRAM_BASELINE_ROW: usize = 50;

/// Color of the histogram reference line.
pub const HISTOGRAM_BASELINE_COLOR: [u8; 3] = [40, 40, 40];

/// Color of the histogram polyline.
pub const HISTOGRAM_LINE_COLOR: [u8; 3] = [0, 255, 0];
