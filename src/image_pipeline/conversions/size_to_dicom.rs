use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    common::config::GeneratorConfig,
    common::error::{GeneratorError, Result},
    conversions::report::SizeReport,
    dicom::{DicomWriter, ImageRecord, StandardDicomWriter, StudyRequest},
    raster::{Phantom, RasterSynthesizer},
    sizing::RasterPlan,
};

pub struct SizeToDicomPipeline<S: RasterSynthesizer, W: DicomWriter> {
    synthesizer: S,
    writer: W,
    config: GeneratorConfig,
}

impl SizeToDicomPipeline<Phantom, StandardDicomWriter> {
    pub fn new(phantom: Phantom, config: GeneratorConfig) -> Self {
        Self {
            synthesizer: phantom,
            writer: StandardDicomWriter,
            config,
        }
    }

    /// Pipeline whose phantom matches the request's modality.
    pub fn for_request(request: &StudyRequest, config: GeneratorConfig) -> Self {
        Self::new(Phantom::for_modality(request.modality.tag()), config)
    }
}

impl<S: RasterSynthesizer, W: DicomWriter> SizeToDicomPipeline<S, W> {
    pub fn with_custom(synthesizer: S, writer: W, config: GeneratorConfig) -> Self {
        Self {
            synthesizer,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, plan: &RasterPlan) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        // Rows and Columns are US attributes.
        let max = u16::MAX as usize;
        if plan.width == 0 || plan.height == 0 || plan.width > max || plan.height > max {
            warn!(
                "Planned dimensions {}x{} cannot be stored",
                plan.width, plan.height
            );
            return Err(GeneratorError::InvalidDimensions(plan.width, plan.height));
        }

        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Plans, synthesizes and encodes one image into `output`.
    #[instrument(skip(self, request, output), fields(modality = %request.modality))]
    pub fn generate(
        &self,
        target_bytes: u64,
        request: &StudyRequest,
        output: &mut dyn Write,
    ) -> Result<RasterPlan> {
        info!("Starting size-targeted DICOM generation");

        let plan = {
            let _span = tracing::info_span!("plan_raster").entered();
            RasterPlan::for_target(target_bytes, &self.config)
        };
        info!("Image dimensions: {} x {}", plan.width, plan.height);

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = plan.width,
                height = plan.height
            ).entered();
            self.validate_dimensions(&plan)?;
        }

        let raster = {
            let _span = tracing::info_span!("synthesize").entered();
            info!(
                "Generating {}x{} {} image data...",
                plan.width, plan.height, request.modality
            );
            let mut rng = self.rng();
            self.synthesizer.synthesize(plan.width, plan.height, &mut rng)?
        };

        let record = ImageRecord::assemble(request, raster, Local::now().naive_local());

        {
            let _span = tracing::info_span!("encode_dicom").entered();
            self.writer.write_dicom(&record, output)?;
        }

        info!(
            width = plan.width,
            height = plan.height,
            payload_bytes = plan.payload_bytes(),
            "Generation complete"
        );
        Ok(plan)
    }

    /// Generates into `output_path`, then re-reads the file size and reports
    /// how far it landed from the target. Nothing is adjusted afterwards.
    #[instrument(skip(self, request, output_path))]
    pub fn generate_file<P: AsRef<Path>>(
        &self,
        target_bytes: u64,
        request: &StudyRequest,
        output_path: P,
    ) -> Result<SizeReport> {
        let output_path = output_path.as_ref();

        info!(
            output = %output_path.display(),
            modality = %request.modality,
            "Creating DICOM file"
        );

        if self.config.create_parent_dirs {
            if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                let _span = tracing::info_span!("create_output_dir").entered();
                fs::create_dir_all(parent).map_err(|e| {
                    GeneratorError::OutputDirectory(format!("{}: {}", parent.display(), e))
                })?;
            }
        }

        let output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            fs::File::create(output_path).map_err(|e| {
                GeneratorError::OutputWrite(format!("{}: {}", output_path.display(), e))
            })?
        };

        let mut output = BufWriter::new(output_file);
        self.generate(target_bytes, request, &mut output)?;
        output.flush().map_err(|e| {
            GeneratorError::OutputWrite(format!("{}: {}", output_path.display(), e))
        })?;
        drop(output);

        let report = {
            let _span = tracing::info_span!("verify_size").entered();
            SizeReport {
                target_bytes,
                actual_bytes: fs::metadata(output_path)?.len(),
            }
        };

        info!(
            actual_bytes = report.actual_bytes,
            deviation_bytes = %report.deviation_bytes(),
            deviation_percent = report.deviation_percent(),
            "Generated file size: {:.1} MB",
            report.actual_megabytes()
        );
        Ok(report)
    }

    pub fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
