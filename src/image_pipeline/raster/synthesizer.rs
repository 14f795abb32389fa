use rand::RngCore;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::Raster;

pub trait RasterSynthesizer {
    fn synthesize(&self, width: usize, height: usize, rng: &mut dyn RngCore) -> Result<Raster>;
}
