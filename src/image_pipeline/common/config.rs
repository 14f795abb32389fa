//! Generator configuration types

/// Bytes reserved for the file meta group and dataset attributes when
/// sizing the pixel payload. This is a rough allowance, not a measurement.
pub const DEFAULT_OVERHEAD_ALLOWANCE: u64 = 10 * 1024;

/// Smallest edge length a planned raster may have
pub const DEFAULT_MIN_DIMENSION: usize = 256;

/// Largest edge length a planned raster may have
pub const DEFAULT_MAX_DIMENSION: usize = 8192;

/// Configuration for size-targeted DICOM generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Non-pixel bytes subtracted from the target before computing the pixel count
    pub overhead_allowance: u64,
    /// Lower clamp applied to both raster dimensions
    pub min_dimension: usize,
    /// Upper clamp applied to both raster dimensions
    pub max_dimension: usize,
    /// Whether to reject planned dimensions that cannot be stored as Rows/Columns
    pub validate_dimensions: bool,
    /// Whether missing parent directories of the output path are created
    pub create_parent_dirs: bool,
    /// Seed for the sample generator; `None` draws a seed from the OS
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            overhead_allowance: DEFAULT_OVERHEAD_ALLOWANCE,
            min_dimension: DEFAULT_MIN_DIMENSION,
            max_dimension: DEFAULT_MAX_DIMENSION,
            validate_dimensions: true,
            create_parent_dirs: true,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }
}

/// Builder for GeneratorConfig
#[derive(Default)]
pub struct GeneratorConfigBuilder {
    overhead_allowance: Option<u64>,
    min_dimension: Option<usize>,
    max_dimension: Option<usize>,
    validate_dimensions: Option<bool>,
    create_parent_dirs: Option<bool>,
    seed: Option<Option<u64>>,
}

impl GeneratorConfigBuilder {
    pub fn overhead_allowance(mut self, bytes: u64) -> Self {
        self.overhead_allowance = Some(bytes);
        self
    }

    pub fn min_dimension(mut self, min: usize) -> Self {
        self.min_dimension = Some(min);
        self
    }

    pub fn max_dimension(mut self, max: usize) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn create_parent_dirs(mut self, create: bool) -> Self {
        self.create_parent_dirs = Some(create);
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> GeneratorConfig {
        let default = GeneratorConfig::default();
        GeneratorConfig {
            overhead_allowance: self.overhead_allowance.unwrap_or(default.overhead_allowance),
            min_dimension: self.min_dimension.unwrap_or(default.min_dimension),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            create_parent_dirs: self.create_parent_dirs.unwrap_or(default.create_parent_dirs),
            seed: self.seed.unwrap_or(default.seed),
        }
    }
}
