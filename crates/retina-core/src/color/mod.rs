pub mod colormap;
pub mod convert;

pub use colormap::{apply_colormap, jet_lut, Colormap};
pub use convert::{gray_to_bgr, to_gray};
