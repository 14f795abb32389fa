//! Part 10 serialization of an [`ImageRecord`] using dicom-rs.
//!
//! The output is an uncompressed Explicit VR Little Endian file: preamble,
//! file meta group, the fixed attribute set, then the raw 16-bit samples as
//! Pixel Data. No conformance validation is attempted beyond what the
//! dicom-rs meta table builder enforces.

use std::io::Write;

use dicom_core::{DataElement, PrimitiveValue, Tag, VR};
use dicom_dictionary_std::{tags, uids};
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
use tracing::debug;

use crate::image_pipeline::common::error::{GeneratorError, Result};
use crate::image_pipeline::dicom::types::ImageRecord;
use crate::image_pipeline::dicom::writer::DicomWriter;

const BITS_ALLOCATED: u16 = 16;

pub struct StandardDicomWriter;

impl DicomWriter for StandardDicomWriter {
    fn write_dicom(&self, record: &ImageRecord, output: &mut dyn Write) -> Result<()> {
        debug!(
            "Encoding DICOM object: {}x{} {}",
            record.columns(),
            record.rows(),
            record.modality
        );

        let dataset = build_dataset(record)?;

        let meta = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid(record.modality.sop_class_uid())
            .media_storage_sop_instance_uid(record.uids.sop_instance.as_str())
            .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
            .implementation_class_uid(record.uids.implementation_class.as_str())
            .implementation_version_name(record.equipment.implementation_version_name.as_str());

        let file = dataset
            .with_meta(meta)
            .map_err(|e| GeneratorError::Encode(e.to_string()))?;

        file.write_all(output)
            .map_err(|e| GeneratorError::Encode(e.to_string()))?;

        debug!("DICOM encoding complete");
        Ok(())
    }
}

/// Builds the main dataset (everything but the file meta group).
pub(crate) fn build_dataset(record: &ImageRecord) -> Result<InMemDicomObject> {
    let rows = u16::try_from(record.rows())
        .map_err(|_| GeneratorError::InvalidDimensions(record.columns(), record.rows()))?;
    let columns = u16::try_from(record.columns())
        .map_err(|_| GeneratorError::InvalidDimensions(record.columns(), record.rows()))?;

    let mut obj = InMemDicomObject::new_empty();
    let mut put = |tag: Tag, vr: VR, value: PrimitiveValue| {
        obj.put(DataElement::new(tag, vr, value));
    };

    put(tags::SOP_CLASS_UID, VR::UI, record.modality.sop_class_uid().into());
    put(tags::SOP_INSTANCE_UID, VR::UI, record.uids.sop_instance.as_str().into());

    let patient = &record.patient;
    put(tags::PATIENT_NAME, VR::PN, patient.name.as_str().into());
    put(tags::PATIENT_ID, VR::LO, patient.id.as_str().into());
    put(tags::PATIENT_BIRTH_DATE, VR::DA, patient.birth_date.as_str().into());
    put(tags::PATIENT_SEX, VR::CS, patient.sex.as_str().into());

    let study = &record.study;
    put(tags::STUDY_INSTANCE_UID, VR::UI, record.uids.study_instance.as_str().into());
    put(tags::STUDY_ID, VR::SH, study.id.as_str().into());
    put(tags::STUDY_DATE, VR::DA, study.date.as_str().into());
    put(tags::STUDY_TIME, VR::TM, study.time.as_str().into());
    put(tags::STUDY_DESCRIPTION, VR::LO, study.description.as_str().into());
    put(tags::ACCESSION_NUMBER, VR::SH, study.accession_number.as_str().into());

    put(tags::SERIES_INSTANCE_UID, VR::UI, record.uids.series_instance.as_str().into());
    put(tags::SERIES_NUMBER, VR::IS, study.series_number.to_string().into());
    put(tags::SERIES_DATE, VR::DA, study.date.as_str().into());
    put(tags::SERIES_TIME, VR::TM, study.time.as_str().into());
    put(tags::SERIES_DESCRIPTION, VR::LO, study.series_description.as_str().into());
    put(tags::MODALITY, VR::CS, record.modality.tag().into());

    put(tags::INSTANCE_NUMBER, VR::IS, study.instance_number.to_string().into());
    put(tags::CONTENT_DATE, VR::DA, study.date.as_str().into());
    put(tags::CONTENT_TIME, VR::TM, study.time.as_str().into());

    put(tags::IMAGE_TYPE, VR::CS, "ORIGINAL\\PRIMARY\\AXIAL".into());
    put(tags::SAMPLES_PER_PIXEL, VR::US, 1u16.into());
    put(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "MONOCHROME2".into());
    put(tags::ROWS, VR::US, rows.into());
    put(tags::COLUMNS, VR::US, columns.into());
    put(tags::BITS_ALLOCATED, VR::US, BITS_ALLOCATED.into());
    put(tags::BITS_STORED, VR::US, BITS_ALLOCATED.into());
    put(tags::HIGH_BIT, VR::US, (BITS_ALLOCATED - 1).into());
    // Unsigned samples
    put(tags::PIXEL_REPRESENTATION, VR::US, 0u16.into());

    let profile = &record.profile;
    put(tags::RESCALE_INTERCEPT, VR::DS, profile.rescale_intercept.to_string().into());
    put(tags::RESCALE_SLOPE, VR::DS, profile.rescale_slope.to_string().into());
    put(tags::WINDOW_CENTER, VR::DS, profile.window_center.to_string().into());
    put(tags::WINDOW_WIDTH, VR::DS, profile.window_width.to_string().into());
    if let Some(thickness) = profile.slice_thickness {
        put(tags::SLICE_THICKNESS, VR::DS, decimal(thickness).into());
    }
    if let Some((row, column)) = profile.pixel_spacing {
        put(tags::PIXEL_SPACING, VR::DS, format!("{}\\{}", decimal(row), decimal(column)).into());
    }
    if let Some(kvp) = profile.kvp {
        put(tags::KVP, VR::DS, kvp.to_string().into());
    }
    if let Some(strength) = profile.magnetic_field_strength {
        put(tags::MAGNETIC_FIELD_STRENGTH, VR::DS, decimal(strength).into());
    }
    if let Some(tr) = profile.repetition_time {
        put(tags::REPETITION_TIME, VR::DS, decimal(tr).into());
    }
    if let Some(te) = profile.echo_time {
        put(tags::ECHO_TIME, VR::DS, decimal(te).into());
    }

    let equipment = &record.equipment;
    put(tags::MANUFACTURER, VR::LO, equipment.manufacturer.as_str().into());
    put(tags::MANUFACTURER_MODEL_NAME, VR::LO, equipment.model_name.as_str().into());
    put(tags::SOFTWARE_VERSIONS, VR::LO, equipment.software_versions.as_str().into());
    put(tags::INSTITUTION_NAME, VR::LO, equipment.institution_name.as_str().into());
    put(tags::STATION_NAME, VR::SH, equipment.station_name.as_str().into());

    put(tags::PIXEL_DATA, VR::OW, record.raster.to_le_bytes().into());

    Ok(obj)
}

/// Decimal String rendering: `1.0` becomes `1`, `0.5` stays `0.5`.
fn decimal(value: f64) -> String {
    format!("{}", value)
}
