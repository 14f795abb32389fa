//! Image generation pipeline module
//!
//! Size planning, procedural raster synthesis and DICOM encoding, each in its
//! own module, with the orchestration living under `conversions`.

pub mod common;
pub mod conversions;
pub mod dicom;
pub mod raster;
pub mod sizing;

pub use common::{
    GeneratorConfig,
    GeneratorConfigBuilder,
    GeneratorError,
    Result,
};

pub use sizing::{
    AspectTier,
    RasterPlan,
    SizeSpec,
    parse_size,
};

pub use raster::{
    Phantom,
    Raster,
    RasterSynthesizer,
};

pub use dicom::{
    DicomWriter,
    ImageRecord,
    Modality,
    StandardDicomWriter,
    StudyRequest,
};

pub use conversions::{
    SizeReport,
    SizeToDicomPipeline,
};
