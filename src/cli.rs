//
// cli.rs
// dicom-scrub
//
// Defines the Clap surfaces for both binaries and drives the inventory and scrub pipelines.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dicom::object::open_file;

use crate::config::FieldConfig;
use crate::inventory::Inventory;
use crate::{scrub, walk};

/// Check which configured DICOM fields are present across a session directory.
#[derive(Parser)]
#[command(name = "check-dicoms")]
#[command(about = "Check DICOM fields", long_about = None)]
pub struct CheckArgs {
    /// Path to the session directory containing DICOM files
    #[arg(default_value = ".")]
    pub path: PathBuf,
    /// Path to the JSON file mapping DICOM tags to field names
    #[arg(short, long, default_value = "id_fields.json")]
    pub config: PathBuf,
}

/// Scrub identifying information from every DICOM file under a session directory.
#[derive(Parser)]
#[command(name = "scrub-dicoms")]
#[command(about = "Scrub identifying information from DICOM files", long_about = None)]
pub struct ScrubArgs {
    /// Path to the session directory containing DICOM files
    #[arg(default_value = ".")]
    pub path: PathBuf,
    /// Subject ID to assign to the PatientID header
    #[arg(short, long)]
    pub subject_id: Option<String>,
    /// Path to the JSON file mapping DICOM tags to field names
    #[arg(short, long, default_value = "id_fields.json")]
    pub config: PathBuf,
}

/// Inventory pipeline: walk, decode, accumulate distinct values, report.
pub fn run_check(args: &CheckArgs) -> Result<()> {
    println!("Checking {} for DICOMs...", args.path.display());

    // Configuration failure is fatal before any file is touched.
    let config = FieldConfig::load(&args.config)?;
    let mut inventory = Inventory::new(&config);

    let mut num_dicoms = 0_usize;
    for file in walk::dicom_files(&args.path) {
        match open_file(&file) {
            Ok(obj) => {
                inventory.accumulate(&obj);
                num_dicoms += 1;
            }
            Err(e) => eprintln!("Skipping unreadable DICOM {}: {e}", file.display()),
        }
    }

    inventory.report(num_dicoms);
    Ok(())
}

/// Scrub pipeline: walk, redact in place, rename; per-file errors never stop the batch.
pub fn run_scrub(args: &ScrubArgs) -> Result<()> {
    let config = FieldConfig::load(&args.config)?;

    let mut num_dicoms = 0_usize;
    for file in walk::dicom_files(&args.path) {
        match scrub::process_file(&file, &config, args.subject_id.as_deref()) {
            Ok(_) => num_dicoms += 1,
            Err(e) => eprintln!("Error scrubbing {}: {e:#}", file.display()),
        }
    }

    println!(
        "{num_dicoms} DICOM files scrubbed from the parent directory {}\n",
        args.path.display()
    );
    Ok(())
}
