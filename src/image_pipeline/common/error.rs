use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid size string: {0}")]
    InvalidSize(String),

    #[error("Failed to create output directory: {0}")]
    OutputDirectory(String),

    #[error("Failed to write output file: {0}")]
    OutputWrite(String),

    #[error("Failed to synthesize raster: {0}")]
    Synthesis(String),

    #[error("Failed to encode DICOM object: {0}")]
    Encode(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
