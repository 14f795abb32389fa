//! Ultrasound-like speckle field with a few brighter organ regions.

use std::f64::consts::SQRT_2;

use rand::{Rng, RngCore};
use rand_distr::Weibull;
use tracing::debug;

use crate::image_pipeline::common::error::{GeneratorError, Result};
use crate::image_pipeline::raster::regions::{Disk, boost_disk, fill_canvas, gaussian};
use crate::image_pipeline::raster::synthesizer::RasterSynthesizer;
use crate::image_pipeline::raster::types::Raster;

/// Rayleigh scale (sigma) of the speckle
const SPECKLE_SCALE: f64 = 20000.0;
const ORGAN_COUNT: usize = 3;

pub struct UsPhantom;

impl RasterSynthesizer for UsPhantom {
    fn synthesize(&self, width: usize, height: usize, rng: &mut dyn RngCore) -> Result<Raster> {
        debug!("Synthesizing US phantom {}x{}", width, height);

        let mut raster = Raster::new(width, height);
        fill_canvas(&mut raster, &speckle(SPECKLE_SCALE)?, rng);

        let echo = gaussian(15000.0, 5000.0)?;
        let radius = width.min(height) as f64 * 0.1;
        for _ in 0..ORGAN_COUNT {
            let ox = (width / 2) as i64 + random_offset(rng, width);
            let oy = (height / 2) as i64 + random_offset(rng, height);
            let organ = Disk::new(ox as f64, oy as f64, radius);
            boost_disk(&mut raster, &organ, &echo, rng);
        }

        Ok(raster)
    }
}

/// Rayleigh(sigma) speckle, expressed as Weibull(scale = sigma * sqrt 2, shape = 2).
fn speckle(sigma: f64) -> Result<Weibull<f64>> {
    Weibull::new(sigma * SQRT_2, 2.0).map_err(|e| GeneratorError::Synthesis(e.to_string()))
}

/// Uniform integer in `[floor(-extent / 4), floor(extent / 4))`, or zero for an empty extent.
fn random_offset(rng: &mut dyn RngCore, extent: usize) -> i64 {
    let low = -(extent.div_ceil(4) as i64);
    let high = (extent / 4) as i64;
    if low >= high {
        return 0;
    }
    rng.random_range(low..high)
}
