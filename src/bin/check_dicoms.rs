//
// check_dicoms.rs
// dicom-scrub
//
// Entry point for the field-inventory binary; delegates to the shared CLI layer.
//
// Thales Matheus Mendonça Santos - November 2025

use clap::Parser;
use dicom_scrub::cli::{self, CheckArgs};

fn main() -> anyhow::Result<()> {
    let args = CheckArgs::parse();
    cli::run_check(&args)
}
