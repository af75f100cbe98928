use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// All regular files under `root` carrying the `.dcm` extension.
///
/// Order follows directory enumeration and is platform-dependent; callers must
/// not rely on it. Unreadable entries are skipped.
pub fn dicom_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "dcm"))
        .map(|e| e.into_path())
        .collect()
}
