pub mod canny;
pub mod gaussian_blur;
pub mod normalize;
