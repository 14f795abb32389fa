//! CT-like axial body slice: soft tissue disk, spine, ribs and air-filled lungs.

use std::f64::consts::PI;

use rand::RngCore;
use rand_distr::Distribution;
use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::regions::{Disk, clip_sample, fill_disk, gaussian};
use crate::image_pipeline::raster::synthesizer::RasterSynthesizer;
use crate::image_pipeline::raster::types::Raster;

const RIB_COUNT: usize = 8;

pub struct CtPhantom;

impl RasterSynthesizer for CtPhantom {
    fn synthesize(&self, width: usize, height: usize, rng: &mut dyn RngCore) -> Result<Raster> {
        debug!("Synthesizing CT phantom {}x{}", width, height);

        let mut raster = Raster::new(width, height);
        let cx = (width / 2) as f64;
        let cy = (height / 2) as f64;
        let short_side = width.min(height) as f64;
        let w = width as f64;
        let h = height as f64;

        // Draw order matters: each layer overwrites the ones before it.
        let body = Disk::new(cx, cy, short_side * 0.4);
        fill_disk(&mut raster, &body, &gaussian(1000.0, 200.0)?, rng);

        let spine = gaussian(3000.0, 300.0)?;
        let half_spine = w * 0.05;
        for y in 0..height {
            let yf = y as f64;
            if yf <= cy * 0.5 || yf >= cy * 1.5 {
                continue;
            }
            for x in 0..width {
                if (x as f64 - cx).abs() < half_spine {
                    raster.set(x, y, clip_sample(spine.sample(rng)));
                }
            }
        }

        let rib = gaussian(2800.0, 200.0)?;
        for i in 0..RIB_COUNT {
            let angle = PI * i as f64 / (RIB_COUNT - 1) as f64;
            let disk = Disk::new(
                cx + angle.cos() * w * 0.3,
                cy + angle.sin() * h * 0.2,
                w * 0.02,
            );
            fill_disk(&mut raster, &disk, &rib, rng);
        }

        let air = gaussian(-1000.0, 100.0)?;
        for side in [-1.0, 1.0] {
            let lung = Disk::new(cx + side * w * 0.15, cy, w * 0.12);
            fill_disk(&mut raster, &lung, &air, rng);
        }

        Ok(raster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn render() -> Raster {
        let mut rng = StdRng::seed_from_u64(42);
        CtPhantom.synthesize(256, 256, &mut rng).unwrap()
    }

    fn patch_mean(raster: &Raster, x0: usize, y0: usize, size: usize) -> f64 {
        let mut sum = 0.0;
        for y in y0..y0 + size {
            for x in x0..x0 + size {
                sum += raster.get(x, y) as f64;
            }
        }
        sum / (size * size) as f64
    }

    #[test]
    fn test_dimensions() {
        let raster = render();
        assert_eq!(raster.width, 256);
        assert_eq!(raster.height, 256);
        assert_eq!(raster.data.len(), 256 * 256);
    }

    #[test]
    fn test_outside_body_is_empty() {
        let raster = render();
        assert_eq!(raster.get(0, 0), 0);
        assert_eq!(raster.get(255, 255), 0);
        assert_eq!(raster.get(5, 128), 0);
    }

    #[test]
    fn test_soft_tissue_intensity() {
        let raster = render();
        // Below the spine band, away from ribs and lungs.
        let mean = patch_mean(&raster, 126, 204, 5);
        assert!((850.0..1150.0).contains(&mean), "soft tissue mean {}", mean);
    }

    #[test]
    fn test_spine_overwrites_body() {
        let raster = render();
        let mean = patch_mean(&raster, 126, 100, 5);
        assert!((2700.0..3300.0).contains(&mean), "spine mean {}", mean);
    }

    #[test]
    fn test_rib_at_angle_zero() {
        let raster = render();
        // Centre (128 + 0.3 * 256, 128), radius 5.12; clear of the right lung.
        let mean = patch_mean(&raster, 203, 127, 3);
        assert!((2500.0..3100.0).contains(&mean), "rib mean {}", mean);
        assert!(raster.get(204, 127) > 2000);
    }

    #[test]
    fn test_lungs_clip_to_zero() {
        let raster = render();
        assert_eq!(patch_mean(&raster, 88, 126, 5), 0.0);
        assert_eq!(patch_mean(&raster, 164, 126, 5), 0.0);
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        assert_eq!(render(), render());
    }
}
