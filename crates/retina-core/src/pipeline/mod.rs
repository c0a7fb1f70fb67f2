pub mod config;
mod dispatch;
mod ganglion;
mod histogram;
mod normalize;
mod processor;
mod types;

pub use config::{Mode, RetinaParams, SessionConfig};
pub use dispatch::{dispatch, edge_pathway};
pub use ganglion::{difference_of_gaussians, dog_response, ganglion_response};
pub use histogram::{draw_histogram, intensity_histogram, normalize_bins, render_histogram};
pub use normalize::{normalize_frame, Sample};
pub use processor::FrameProcessor;
pub use types::{DisplayFrame, PipelineStage, ProcessOutput};
