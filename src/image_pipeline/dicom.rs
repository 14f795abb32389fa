//! DICOM container module
//!
//! Assembles the attribute set of a synthetic image and serializes it,
//! together with the raster, as a Part 10 file.

mod profile;
mod standard_dicom_writer;
pub mod types;
pub mod uid;
mod writer;

pub use profile::ModalityProfile;
pub use standard_dicom_writer::StandardDicomWriter;
pub use types::{Equipment, ImageRecord, Modality, Patient, RecordUids, Study, StudyRequest};
pub use uid::mint_uid;
pub use writer::DicomWriter;
