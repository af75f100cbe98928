//
// config.rs
// dicom-scrub
//
// Loads the JSON scrub-field configuration mapping DICOM tag locators to human-readable field names.
//
// Thales Matheus Mendonça Santos - November 2025

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use dicom::core::Tag;
use thiserror::Error;

/// Failures while loading the field configuration. All of these abort the run
/// before any DICOM file is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read field configuration {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("field configuration {path} is not a JSON object of strings: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid tag {tag:?} for field {name:?}: expected a \"GGGG,EEEE\" hex pair")]
    InvalidTag { tag: String, name: String },
}

/// Scrub-field mapping loaded from `id_fields.json`.
///
/// Keys are tag locators written as hex pairs (e.g. `"0010,0010"`), values are
/// the field names shown in reports. Tag-first orientation keeps keys unique;
/// name-first files need a one-time key/value swap.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    fields: BTreeMap<Tag, String>,
}

impl FieldConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let raw: BTreeMap<String, String> =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        let mut fields = BTreeMap::new();
        for (tag_text, name) in raw {
            let tag = parse_tag(&tag_text).ok_or_else(|| ConfigError::InvalidTag {
                tag: tag_text.clone(),
                name: name.clone(),
            })?;
            fields.insert(tag, name);
        }

        Ok(Self { fields })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tag, &str)> + '_ {
        self.fields.iter().map(|(tag, name)| (*tag, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parse a `"GGGG,EEEE"` tag locator into a [`Tag`].
pub fn parse_tag(text: &str) -> Option<Tag> {
    let (group, element) = text.split_once(',')?;
    let group = u16::from_str_radix(group.trim(), 16).ok()?;
    let element = u16::from_str_radix(element.trim(), 16).ok()?;
    Some(Tag(group, element))
}
