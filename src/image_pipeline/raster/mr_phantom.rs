//! MR-like brain slice: grey matter annulus, white matter core, scattered CSF.

use rand::{Rng, RngCore};
use rand_distr::Distribution;
use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::regions::{Disk, clip_sample, gaussian};
use crate::image_pipeline::raster::synthesizer::RasterSynthesizer;
use crate::image_pipeline::raster::types::Raster;

/// Fraction of brain pixels replaced by CSF
const CSF_DENSITY: f64 = 0.05;

pub struct MrPhantom;

impl RasterSynthesizer for MrPhantom {
    fn synthesize(&self, width: usize, height: usize, rng: &mut dyn RngCore) -> Result<Raster> {
        debug!("Synthesizing MR phantom {}x{}", width, height);

        let mut raster = Raster::new(width, height);
        let short_side = width.min(height) as f64;
        let brain = Disk::new((width / 2) as f64, (height / 2) as f64, short_side * 0.35);
        let white_radius_sq = (short_side * 0.15).powi(2);

        let grey_matter = gaussian(30000.0, 3000.0)?;
        let white_matter = gaussian(45000.0, 2000.0)?;
        let csf = gaussian(10000.0, 1000.0)?;

        for y in brain.rows(height) {
            for x in brain.columns(width) {
                if !brain.contains(x, y) {
                    continue;
                }
                let tissue = if brain.distance_sq(x, y) > white_radius_sq {
                    &grey_matter
                } else {
                    &white_matter
                };
                let mut value = tissue.sample(rng);
                if rng.random_bool(CSF_DENSITY) {
                    value = csf.sample(rng);
                }
                raster.set(x, y, clip_sample(value));
            }
        }

        Ok(raster)
    }
}
