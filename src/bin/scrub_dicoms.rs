//
// scrub_dicoms.rs
// dicom-scrub
//
// Entry point for the scrub-and-rename binary; delegates to the shared CLI layer.
//
// Thales Matheus Mendonça Santos - November 2025

use clap::Parser;
use dicom_scrub::cli::{self, ScrubArgs};

fn main() -> anyhow::Result<()> {
    let args = ScrubArgs::parse();
    cli::run_scrub(&args)
}
