//! Shape and sampling helpers shared by the phantoms.

use std::ops::Range;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::image_pipeline::common::error::{GeneratorError, Result};
use crate::image_pipeline::raster::types::Raster;

pub(crate) fn gaussian(mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std_dev).map_err(|e| GeneratorError::Synthesis(e.to_string()))
}

/// Clips a drawn value into the 16-bit sample range.
#[inline]
pub(crate) fn clip_sample(value: f64) -> u16 {
    value.clamp(0.0, u16::MAX as f64) as u16
}

/// Open disk: a pixel is inside when its squared distance is strictly below r².
#[derive(Debug, Clone, Copy)]
pub(crate) struct Disk {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Disk {
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self { cx, cy, radius }
    }

    #[inline]
    pub fn distance_sq(&self, x: usize, y: usize) -> f64 {
        let dx = x as f64 - self.cx;
        let dy = y as f64 - self.cy;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.distance_sq(x, y) < self.radius * self.radius
    }

    /// Columns that can intersect the disk, limited to the raster.
    pub fn columns(&self, width: usize) -> Range<usize> {
        span(self.cx, self.radius, width)
    }

    /// Rows that can intersect the disk, limited to the raster.
    pub fn rows(&self, height: usize) -> Range<usize> {
        span(self.cy, self.radius, height)
    }
}

fn span(center: f64, radius: f64, limit: usize) -> Range<usize> {
    let limit = limit as f64;
    let start = (center - radius).floor().clamp(0.0, limit) as usize;
    let end = ((center + radius).ceil() + 1.0).clamp(0.0, limit) as usize;
    start..end.max(start)
}

/// Overwrites every pixel inside `disk` with a fresh draw from `dist`.
pub(crate) fn fill_disk<D, R>(raster: &mut Raster, disk: &Disk, dist: &D, rng: &mut R)
where
    D: Distribution<f64>,
    R: Rng + ?Sized,
{
    for y in disk.rows(raster.height) {
        for x in disk.columns(raster.width) {
            if disk.contains(x, y) {
                raster.set(x, y, clip_sample(dist.sample(rng)));
            }
        }
    }
}

/// Adds a fresh draw from `dist` to every pixel inside `disk`, saturating at the sample range.
pub(crate) fn boost_disk<D, R>(raster: &mut Raster, disk: &Disk, dist: &D, rng: &mut R)
where
    D: Distribution<f64>,
    R: Rng + ?Sized,
{
    for y in disk.rows(raster.height) {
        for x in disk.columns(raster.width) {
            if disk.contains(x, y) {
                let boosted = raster.get(x, y) as f64 + dist.sample(rng);
                raster.set(x, y, clip_sample(boosted));
            }
        }
    }
}

/// Overwrites the whole canvas with draws from `dist`.
pub(crate) fn fill_canvas<D, R>(raster: &mut Raster, dist: &D, rng: &mut R)
where
    D: Distribution<f64>,
    R: Rng + ?Sized,
{
    for sample in raster.data.iter_mut() {
        *sample = clip_sample(dist.sample(rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct Constant(f64);

    impl Distribution<f64> for Constant {
        fn sample<R: Rng + ?Sized>(&self, _rng: &mut R) -> f64 {
            self.0
        }
    }

    fn uniform_canvas(value: u16) -> Raster {
        let mut raster = Raster::new(20, 20);
        raster.data.fill(value);
        raster
    }

    #[test]
    fn test_clip_sample() {
        assert_eq!(clip_sample(-1000.0), 0);
        assert_eq!(clip_sample(1234.9), 1234);
        assert_eq!(clip_sample(70000.0), u16::MAX);
        assert_eq!(clip_sample(f64::NAN), 0);
    }

    #[test]
    fn test_disk_membership_is_strict() {
        let disk = Disk::new(10.0, 10.0, 3.0);
        assert!(disk.contains(10, 10));
        assert!(disk.contains(12, 10));
        assert!(!disk.contains(13, 10));
    }

    #[test]
    fn test_disk_bounds_are_clipped_to_raster() {
        let disk = Disk::new(1.0, 98.0, 5.0);
        assert_eq!(disk.columns(100), 0..7);
        assert_eq!(disk.rows(100), 93..100);

        let outside = Disk::new(-50.0, -50.0, 5.0);
        assert!(outside.columns(100).is_empty());
        assert!(outside.rows(100).is_empty());
    }

    #[test]
    fn test_boost_disk_adds_to_existing_samples() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut raster = uniform_canvas(10000);
        let disk = Disk::new(10.0, 10.0, 3.0);
        boost_disk(&mut raster, &disk, &Constant(5000.0), &mut rng);

        for y in 0..20 {
            for x in 0..20 {
                let expected = if disk.contains(x, y) { 15000 } else { 10000 };
                assert_eq!(raster.get(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_boost_disk_saturates() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut raster = uniform_canvas(64000);
        boost_disk(&mut raster, &Disk::new(10.0, 10.0, 3.0), &Constant(5000.0), &mut rng);
        assert_eq!(raster.get(10, 10), u16::MAX);
        assert_eq!(raster.get(0, 0), 64000);
    }

    #[test]
    fn test_fill_disk_overwrites_inside_only() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut raster = uniform_canvas(10000);
        let disk = Disk::new(4.0, 15.0, 2.5);
        fill_disk(&mut raster, &disk, &Constant(-300.0), &mut rng);

        for y in 0..20 {
            for x in 0..20 {
                let expected = if disk.contains(x, y) { 0 } else { 10000 };
                assert_eq!(raster.get(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_canvas_replaces_everything() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut raster = uniform_canvas(1);
        fill_canvas(&mut raster, &Constant(1234.0), &mut rng);
        assert!(raster.data.iter().all(|&v| v == 1234));
    }
}
