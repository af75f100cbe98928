use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// Upper bound on collision probes; past this the directory contents are pathological.
const MAX_PROBES: u32 = 10_000;

/// Base filename stem derived from the original record's metadata.
pub fn derive_stem(modality: &str, series_uid: &str, instance_number: &str) -> String {
    format!("{modality}.{series_uid}.{instance_number}")
}

/// First unused `{stem}.dcm` (then `{stem}_1.dcm`, `{stem}_2.dcm`, ...) in the
/// directory of `original`.
///
/// The probe is an explicit counter loop with a filesystem existence check per
/// candidate, so two files deriving the same stem never overwrite each other.
/// A file that already carries a derived name keeps it.
pub fn next_available_path(original: &Path, stem: &str) -> Result<PathBuf> {
    let dir = original.parent().unwrap_or_else(|| Path::new("."));

    for attempt in 0..=MAX_PROBES {
        let file_name = if attempt == 0 {
            format!("{stem}.dcm")
        } else {
            format!("{stem}_{attempt}.dcm")
        };
        let candidate = dir.join(file_name);
        if candidate == original || !candidate.exists() {
            return Ok(candidate);
        }
    }

    bail!(
        "no unused filename for stem {stem:?} in {} after {MAX_PROBES} attempts",
        dir.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn stem_joins_metadata_with_dots() {
        assert_eq!(derive_stem("MR", "1.2.840.99", "7"), "MR.1.2.840.99.7");
        assert_eq!(derive_stem("NA", "NA", "0"), "NA.NA.0");
    }

    #[test]
    fn probe_returns_base_name_when_free() {
        let dir = tempdir().expect("tmpdir");
        let original = dir.path().join("source.dcm");
        fs::write(&original, b"x").expect("write");

        let target = next_available_path(&original, "MR.1.2.3.1").expect("probe");
        assert_eq!(target, dir.path().join("MR.1.2.3.1.dcm"));
    }

    #[test]
    fn probe_skips_taken_names_in_order() {
        let dir = tempdir().expect("tmpdir");
        let original = dir.path().join("source.dcm");
        fs::write(&original, b"x").expect("write");
        fs::write(dir.path().join("MR.1.2.3.1.dcm"), b"a").expect("write");
        fs::write(dir.path().join("MR.1.2.3.1_1.dcm"), b"b").expect("write");

        let target = next_available_path(&original, "MR.1.2.3.1").expect("probe");
        assert_eq!(target, dir.path().join("MR.1.2.3.1_2.dcm"));
    }

    #[test]
    fn probe_keeps_an_already_derived_name() {
        let dir = tempdir().expect("tmpdir");
        let original = dir.path().join("MR.1.2.3.1.dcm");
        fs::write(&original, b"x").expect("write");

        let target = next_available_path(&original, "MR.1.2.3.1").expect("probe");
        assert_eq!(target, original);
    }
}
