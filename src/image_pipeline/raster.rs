//! Raster synthesis module
//!
//! Procedural 16-bit rasters whose intensity layout loosely resembles a
//! CT, MR or ultrasound slice, selected through the [`Phantom`] variants.

mod ct_phantom;
mod generic_phantom;
mod mr_phantom;
mod phantom;
mod regions;
mod synthesizer;
mod us_phantom;
pub mod types;

pub use ct_phantom::CtPhantom;
pub use generic_phantom::GenericPhantom;
pub use mr_phantom::MrPhantom;
pub use phantom::Phantom;
pub use synthesizer::RasterSynthesizer;
pub use types::Raster;
pub use us_phantom::UsPhantom;
