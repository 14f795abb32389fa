//! Pipeline conversions module
//!
//! Orchestrates size planning, raster synthesis and DICOM encoding.

mod report;
mod size_to_dicom;


pub use report::SizeReport;
pub use size_to_dicom::SizeToDicomPipeline;
