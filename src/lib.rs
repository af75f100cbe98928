//
// lib.rs
// dicom-scrub
//
// Exposes the crate's modules and re-exports the CLI entry points for the check and scrub binaries.
//
// Thales Matheus Mendonça Santos - November 2025

// Public surface of the library: each module mirrors a pipeline stage or shared utility.
pub mod cli;
pub mod config;
pub mod dicom_access;
pub mod inventory;
pub mod redact;
pub mod rename;
pub mod scrub;
pub mod walk;

pub use cli::{run_check, run_scrub, CheckArgs, ScrubArgs};
