use crate::frame::Frame;

/// Processing stage, used to tag diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Normalizing,
    Filtering,
    Retrieving,
    Histogram,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normalizing => write!(f, "Normalizing input"),
            Self::Filtering => write!(f, "Applying filter"),
            Self::Retrieving => write!(f, "Retrieving output"),
            Self::Histogram => write!(f, "Rendering histogram"),
        }
    }
}

/// The frame handed back for display.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayFrame<T = u8> {
    /// An 8-bit frame: the processed result, or the normalized input when
    /// filtering failed.
    Converted(Frame),
    /// The caller's frame, untouched, because it could not be normalized.
    Original(Frame<T>),
}

impl<T> DisplayFrame<T> {
    pub fn height(&self) -> usize {
        match self {
            Self::Converted(f) => f.height(),
            Self::Original(f) => f.height(),
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Self::Converted(f) => f.width(),
            Self::Original(f) => f.width(),
        }
    }

    pub fn channels(&self) -> usize {
        match self {
            Self::Converted(f) => f.channels(),
            Self::Original(f) => f.channels(),
        }
    }

    /// The 8-bit frame, if normalization succeeded.
    pub fn converted(&self) -> Option<&Frame> {
        match self {
            Self::Converted(f) => Some(f),
            Self::Original(_) => None,
        }
    }
}

impl DisplayFrame<u8> {
    /// Unwrap into a frame; both variants hold `u8` samples.
    pub fn into_frame(self) -> Frame {
        match self {
            Self::Converted(f) | Self::Original(f) => f,
        }
    }
}

/// Result of processing one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessOutput<T = u8> {
    pub frame: Option<DisplayFrame<T>>,
    pub histogram: Option<Frame>,
}

impl<T> ProcessOutput<T> {
    /// No input was supplied.
    pub fn no_signal() -> Self {
        Self {
            frame: None,
            histogram: None,
        }
    }

    /// A fallback frame with no histogram.
    pub fn degraded(frame: DisplayFrame<T>) -> Self {
        Self {
            frame: Some(frame),
            histogram: None,
        }
    }

    pub fn is_no_signal(&self) -> bool {
        self.frame.is_none() && self.histogram.is_none()
    }

    /// True when a frame came back but processing did not complete.
    pub fn is_degraded(&self) -> bool {
        self.frame.is_some() && self.histogram.is_none()
    }
}
