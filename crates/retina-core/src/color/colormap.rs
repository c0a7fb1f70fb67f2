use std::sync::OnceLock;

use ndarray::{Array2, Array3};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::frame::Frame;

/// Color palette used to render scalar fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Colormap {
    /// Dark blue -> blue -> cyan -> green -> yellow -> red -> dark red.
    #[default]
    Jet,
}

impl Colormap {
    pub fn lut(&self) -> &'static [[u8; 3]; 256] {
        match self {
            Self::Jet => jet_lut(),
        }
    }
}

/// The 256-entry jet lookup table, indexed by intensity, entries in BGR order.
pub fn jet_lut() -> &'static [[u8; 3]; 256] {
    static LUT: OnceLock<[[u8; 3]; 256]> = OnceLock::new();
    LUT.get_or_init(|| {
        let mut lut = [[0u8; 3]; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            let (r, g, b) = jet(i as f32 / 255.0);
            *entry = [b, g, r];
        }
        lut
    })
}

/// Map a gray plane through a palette into a three-channel BGR frame.
pub fn apply_colormap(gray: &Array2<u8>, colormap: Colormap) -> Frame {
    let lut = colormap.lut();
    let (h, w) = gray.dim();
    Frame::new(Array3::from_shape_fn((h, w, COLOR_CHANNEL_COUNT), |(row, col, ch)| {
        lut[gray[[row, col]] as usize][ch]
    }))
}

/// Piecewise-linear jet at `t` in [0, 1], returned as (r, g, b).
fn jet(t: f32) -> (u8, u8, u8) {
    let channel = |offset: f32| -> f32 {
        // Flat-topped ramp peaking around t = offset / 4.
        (1.5 - (4.0 * t - offset).abs()).clamp(0.0, 1.0)
    };
    let r = channel(3.0);
    let g = channel(2.0);
    let b = channel(1.0);
    (to_u8(r), to_u8(g), to_u8(b))
}

fn to_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
