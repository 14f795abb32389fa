//! Size planning module
//!
//! Turns a human-readable size string into a byte count and the byte count
//! into raster dimensions whose pixel payload approximates it.

mod parse;
mod plan;

pub use parse::{GIB, KIB, MIB, SizeSpec, parse_size};
pub use plan::{AspectTier, BYTES_PER_SAMPLE, RasterPlan, payload_pixels};
