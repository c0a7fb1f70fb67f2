use anyhow::Result;
use retina_core::pipeline::Mode;

use crate::summary::print_modes;

pub fn run() -> Result<()> {
    print_modes(&Mode::ALL, Mode::default());
    Ok(())
}
