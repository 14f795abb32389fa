use std::process::ExitCode;

use clap::Parser;
use dicom_loadgen::cli::{self, Cli};
use dicom_loadgen::logger;

use tracing::{error, info};

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init(args.verbose);

    info!("Starting dicom_loadgen...");

    match cli::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Generation failed: {:#}", e);
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
