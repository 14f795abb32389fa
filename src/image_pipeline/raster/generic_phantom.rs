use rand::RngCore;
use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::regions::{fill_canvas, gaussian};
use crate::image_pipeline::raster::synthesizer::RasterSynthesizer;
use crate::image_pipeline::raster::types::Raster;

/// Featureless Gaussian noise for modalities without a dedicated phantom.
pub struct GenericPhantom;

impl RasterSynthesizer for GenericPhantom {
    fn synthesize(&self, width: usize, height: usize, rng: &mut dyn RngCore) -> Result<Raster> {
        debug!("Synthesizing generic phantom {}x{}", width, height);

        let mut raster = Raster::new(width, height);
        fill_canvas(&mut raster, &gaussian(25000.0, 10000.0)?, rng);
        Ok(raster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_noise_statistics() {
        let mut rng = StdRng::seed_from_u64(5);
        let raster = GenericPhantom.synthesize(256, 256, &mut rng).unwrap();
        let mean = raster.mean();
        assert!((24500.0..25500.0).contains(&mean), "mean {}", mean);
        assert!(raster.data.iter().any(|&v| v > 45000));
    }
}
