use tracing::debug;

use crate::image_pipeline::common::config::GeneratorConfig;

/// Samples are always 16-bit.
pub const BYTES_PER_SAMPLE: u64 = 2;

const SQUARE_LIMIT: u64 = 512 * 512;
const WIDE_1024_LIMIT: u64 = 1024 * 1024;
const WIDE_2048_LIMIT: u64 = 2048 * 2048;

/// Aspect policy chosen from the number of pixels a target can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectTier {
    /// Fewer than 512x512 pixels: square image
    Square,
    /// Fewer than 1024x1024 pixels: width fixed at 1024
    Wide1024,
    /// Fewer than 2048x2048 pixels: width fixed at 2048
    Wide2048,
    /// Everything larger: square image again
    LargeSquare,
}

impl AspectTier {
    pub fn for_pixels(total_pixels: u64) -> Self {
        if total_pixels < SQUARE_LIMIT {
            AspectTier::Square
        } else if total_pixels < WIDE_1024_LIMIT {
            AspectTier::Wide1024
        } else if total_pixels < WIDE_2048_LIMIT {
            AspectTier::Wide2048
        } else {
            AspectTier::LargeSquare
        }
    }

    /// Width and height before clamping.
    pub fn dimensions(self, total_pixels: u64) -> (u64, u64) {
        match self {
            AspectTier::Square | AspectTier::LargeSquare => {
                let side = (total_pixels as f64).sqrt() as u64;
                (side, side)
            }
            AspectTier::Wide1024 => (1024, total_pixels / 1024),
            AspectTier::Wide2048 => (2048, total_pixels / 2048),
        }
    }
}

/// Number of 16-bit samples that fit in `target_bytes` once the overhead allowance is removed.
pub fn payload_pixels(target_bytes: u64, overhead_allowance: u64) -> u64 {
    target_bytes.saturating_sub(overhead_allowance) / BYTES_PER_SAMPLE
}

/// Raster dimensions chosen to approximate a target file size.
///
/// Both dimensions are clamped into the configured range, so targets far
/// below or above what that range can express will not be met. The tiering
/// is a heuristic; the written file also deviates by however much the real
/// metadata differs from the overhead allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterPlan {
    pub width: usize,
    pub height: usize,
}

impl RasterPlan {
    pub fn for_target(target_bytes: u64, config: &GeneratorConfig) -> Self {
        let total_pixels = payload_pixels(target_bytes, config.overhead_allowance);
        let tier = AspectTier::for_pixels(total_pixels);
        let (width, height) = tier.dimensions(total_pixels);

        let plan = Self {
            width: clamp_dimension(width, config),
            height: clamp_dimension(height, config),
        };

        debug!(
            target_bytes,
            total_pixels,
            ?tier,
            width = plan.width,
            height = plan.height,
            "Planned raster"
        );
        plan
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn payload_bytes(&self) -> u64 {
        self.pixel_count() * BYTES_PER_SAMPLE
    }
}

fn clamp_dimension(value: u64, config: &GeneratorConfig) -> usize {
    let value = usize::try_from(value).unwrap_or(usize::MAX);
    value.min(config.max_dimension).max(config.min_dimension)
}
