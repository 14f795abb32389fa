use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::dicom::types::ImageRecord;

pub trait DicomWriter {
    fn write_dicom(&self, record: &ImageRecord, output: &mut dyn Write) -> Result<()>;
}
