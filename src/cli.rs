//! Command-line surface
//!
//! ```text
//! dicom_loadgen --size 100MB --output test_100mb.dcm
//! dicom_loadgen --size 500MB --modality MR --output test_mr_500mb.dcm
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::image_pipeline::{
    GeneratorConfig, Modality, SizeReport, SizeSpec, SizeToDicomPipeline, StudyRequest,
    dicom::types::DEFAULT_PATIENT_NAME,
};

/// Generate large synthetic DICOM files for load testing
#[derive(Parser, Debug)]
#[command(name = "dicom_loadgen")]
#[command(version)]
#[command(about = "Generate synthetic DICOM files of a target size")]
pub struct Cli {
    /// Target file size (e.g. 100MB, 500MB, 1GB)
    #[arg(long)]
    pub size: String,

    /// Output DICOM file path; missing parent directories are created
    #[arg(long)]
    pub output: PathBuf,

    /// DICOM modality
    #[arg(long, value_enum, default_value_t = Modality::Ct)]
    pub modality: Modality,

    /// Patient name
    #[arg(long, default_value = DEFAULT_PATIENT_NAME)]
    pub patient_name: String,

    /// Seed for reproducible pixel data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn request(&self) -> StudyRequest {
        StudyRequest {
            modality: self.modality,
            patient_name: self.patient_name.clone(),
        }
    }

    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::builder().seed(self.seed).build()
    }
}

/// Runs one generation and prints the outcome.
pub fn run(cli: &Cli) -> anyhow::Result<SizeReport> {
    let target: SizeSpec = cli
        .size
        .parse()
        .with_context(|| format!("could not parse --size {:?}", cli.size))?;
    info!("Target size: {}", target);

    let request = cli.request();
    let pipeline = SizeToDicomPipeline::for_request(&request, cli.config());
    let report = pipeline
        .generate_file(target.bytes(), &request, &cli.output)
        .with_context(|| format!("failed to generate {}", cli.output.display()))?;

    println!("Generated file size: {:.1} MB", report.actual_megabytes());
    println!(
        "Difference from target: {:.1} MB ({:+.2}%)",
        report.deviation_megabytes(),
        report.deviation_percent()
    );
    println!();
    println!("Successfully created {}", cli.output.display());
    println!(
        "File size: {} bytes ({:.1} MB)",
        report.actual_bytes,
        report.actual_megabytes()
    );
    println!("Modality: {}", cli.modality);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("dicom_loadgen").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--size", "1MB", "--output", "test.dcm"]).unwrap();
        assert_eq!(cli.modality, Modality::Ct);
        assert_eq!(cli.patient_name, "Test^Patient");
        assert_eq!(cli.seed, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "--size", "500MB", "--output", "out/mr.dcm", "--modality", "MR",
            "--patient-name", "Doe^John", "--seed", "99", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.modality, Modality::Mr);
        assert_eq!(cli.patient_name, "Doe^John");
        assert_eq!(cli.output, PathBuf::from("out/mr.dcm"));
        assert_eq!(cli.config().seed, Some(99));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_modality_rejected() {
        let err = parse(&["--size", "1MB", "--output", "x.dcm", "--modality", "XR"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_required_flags() {
        assert!(parse(&["--output", "x.dcm"]).is_err());
        assert!(parse(&["--size", "1MB"]).is_err());
    }

    #[test]
    fn test_run_reports_bad_size() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("never.dcm");
        let cli = parse(&["--size", "lots", "--output", output.to_str().unwrap()]).unwrap();

        let err = run(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid size string"));
        assert!(!output.exists());
    }
}
