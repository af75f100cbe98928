use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dicom::core::{DataElement, Tag, VR};
use dicom::core::value::PrimitiveValue;
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::{open_file, InMemDicomObject};

use crate::config::FieldConfig;
use crate::dicom_access::ElementAccess;
use crate::redact::redacted_value;
use crate::rename;

const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
const MODALITY: Tag = Tag(0x0008, 0x0060);
const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);

/// A configured field whose VR has no redaction rule; left unmodified.
pub struct SkippedField {
    pub field: String,
    pub vr: VR,
}

/// Replace every configured field present in `obj` with its redacted value and,
/// when `subject_id` is set and non-empty, overwrite PatientID unconditionally.
///
/// Mutates the in-memory record only; persisting is the caller's step. The
/// returned list names configured fields whose VR the policy does not cover.
pub fn scrub_object(
    obj: &mut InMemDicomObject<StandardDataDictionary>,
    config: &FieldConfig,
    subject_id: Option<&str>,
) -> Vec<SkippedField> {
    let mut skipped = Vec::new();

    for (tag, name) in config.iter() {
        let Some(vr) = obj.element_vr(tag) else {
            continue;
        };
        match redacted_value(vr) {
            Some(value) => {
                obj.put(DataElement::new(tag, vr, value));
            }
            None => skipped.push(SkippedField {
                field: name.to_string(),
                vr,
            }),
        }
    }

    if let Some(id) = subject_id.filter(|id| !id.is_empty()) {
        obj.put(DataElement::new(PATIENT_ID, VR::LO, PrimitiveValue::from(id)));
    }

    skipped
}

/// Scrub one DICOM file in place and rename it to a metadata-derived name.
///
/// The record is fully redacted in memory before anything touches the disk;
/// persist happens before rename, so a failed save leaves the file under its
/// original name. Returns the path the file ends up at.
pub fn process_file(
    path: &Path,
    config: &FieldConfig,
    subject_id: Option<&str>,
) -> Result<PathBuf> {
    let mut obj = open_file(path).context("Failed to open DICOM file")?;

    // Naming fields are captured from the original record, before redaction.
    let modality = obj.element_str(MODALITY).unwrap_or_else(|| "NA".into());
    let series_uid = obj
        .element_str(SERIES_INSTANCE_UID)
        .unwrap_or_else(|| "NA".into());
    let instance_number = obj
        .element_str(INSTANCE_NUMBER)
        .unwrap_or_else(|| "0".into());

    for entry in scrub_object(&mut obj, config, subject_id) {
        eprintln!(
            "{}: field {} has VR {}, which is not handled by the scrub policy; left unmodified",
            path.display(),
            entry.field,
            entry.vr
        );
    }

    obj.write_to_file(path)
        .with_context(|| format!("Failed to save scrubbed DICOM {}", path.display()))?;

    let stem = rename::derive_stem(&modality, &series_uid, &instance_number);
    let target = rename::next_available_path(path, &stem)?;
    if target != path {
        fs::rename(path, &target)
            .with_context(|| format!("Failed to rename {} to {}", path.display(), target.display()))?;
    }

    Ok(target)
}
