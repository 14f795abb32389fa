//! Image record types

use std::fmt;

use chrono::NaiveDateTime;
use clap::ValueEnum;
use dicom_dictionary_std::uids;

use crate::image_pipeline::dicom::profile::ModalityProfile;
use crate::image_pipeline::dicom::uid::mint_uid;
use crate::image_pipeline::raster::types::Raster;

pub const DEFAULT_PATIENT_NAME: &str = "Test^Patient";

/// Acquisition technique of the generated image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Modality {
    #[value(name = "CT")]
    Ct,
    #[value(name = "MR")]
    Mr,
    #[value(name = "US")]
    Us,
}

impl Modality {
    /// Code string stored in the Modality attribute
    pub fn tag(self) -> &'static str {
        match self {
            Modality::Ct => "CT",
            Modality::Mr => "MR",
            Modality::Us => "US",
        }
    }

    /// Storage SOP class matching the modality
    pub fn sop_class_uid(self) -> &'static str {
        match self {
            Modality::Ct => uids::CT_IMAGE_STORAGE,
            Modality::Mr => uids::MR_IMAGE_STORAGE,
            Modality::Us => uids::ULTRASOUND_IMAGE_STORAGE,
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What the caller asks for, besides the size
#[derive(Debug, Clone)]
pub struct StudyRequest {
    pub modality: Modality,
    pub patient_name: String,
}

impl Default for StudyRequest {
    fn default() -> Self {
        Self {
            modality: Modality::Ct,
            patient_name: DEFAULT_PATIENT_NAME.to_string(),
        }
    }
}

/// Freshly minted identifiers; none is shared with another record or field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUids {
    pub sop_instance: String,
    pub study_instance: String,
    pub series_instance: String,
    pub implementation_class: String,
}

impl RecordUids {
    pub fn mint() -> Self {
        Self {
            sop_instance: mint_uid(),
            study_instance: mint_uid(),
            series_instance: mint_uid(),
            implementation_class: mint_uid(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub id: String,
    pub birth_date: String,
    pub sex: String,
}

/// Study, series and instance level attributes. Series and content
/// date/time repeat the study's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Study {
    pub id: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub accession_number: String,
    pub series_number: u32,
    pub series_description: String,
    pub instance_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    pub manufacturer: String,
    pub model_name: String,
    pub software_versions: String,
    pub institution_name: String,
    pub station_name: String,
    pub implementation_version_name: String,
}

impl Default for Equipment {
    fn default() -> Self {
        Self {
            manufacturer: "Large DICOM Generator".to_string(),
            model_name: "Test Generator v1.0".to_string(),
            software_versions: "1.0".to_string(),
            institution_name: "Test Institution".to_string(),
            station_name: "TEST_STATION".to_string(),
            implementation_version_name: "LARGE_DICOM_GEN_1.0".to_string(),
        }
    }
}

/// Everything written to one output file
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub modality: Modality,
    pub uids: RecordUids,
    pub patient: Patient,
    pub study: Study,
    pub equipment: Equipment,
    pub profile: ModalityProfile,
    pub raster: Raster,
}

impl ImageRecord {
    pub fn assemble(request: &StudyRequest, raster: Raster, acquired_at: NaiveDateTime) -> Self {
        let modality = request.modality;
        Self {
            modality,
            uids: RecordUids::mint(),
            patient: Patient {
                name: request.patient_name.clone(),
                id: format!("TEST_{}_{}", modality, acquired_at.format("%Y%m%d_%H%M%S")),
                birth_date: "19800101".to_string(),
                sex: "O".to_string(),
            },
            study: Study {
                id: "1".to_string(),
                date: acquired_at.format("%Y%m%d").to_string(),
                time: acquired_at.format("%H%M%S").to_string(),
                description: format!("Large {} Test Study", modality),
                accession_number: format!("ACC{}", acquired_at.format("%Y%m%d%H%M%S")),
                series_number: 1,
                series_description: format!("Large {} Test Series", modality),
                instance_number: 1,
            },
            equipment: Equipment::default(),
            profile: ModalityProfile::for_modality(modality),
            raster,
        }
    }

    pub fn rows(&self) -> usize {
        self.raster.height
    }

    pub fn columns(&self) -> usize {
        self.raster.width
    }
}
