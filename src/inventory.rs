use std::collections::{BTreeMap, BTreeSet};

use dicom::core::Tag;

use crate::config::FieldConfig;
use crate::dicom_access::ElementAccess;

/// Distinct values observed per configured field across a whole session.
///
/// Seeded from the configuration so every field reports, possibly with an
/// empty set, even over a tree with no DICOMs. Sets make the result
/// independent of traversal order.
pub struct Inventory {
    fields: Vec<(Tag, String)>,
    values: BTreeMap<String, BTreeSet<String>>,
}

impl Inventory {
    pub fn new(config: &FieldConfig) -> Self {
        let fields: Vec<(Tag, String)> = config
            .iter()
            .map(|(tag, name)| (tag, name.to_string()))
            .collect();
        let values = fields
            .iter()
            .map(|(_, name)| (name.clone(), BTreeSet::new()))
            .collect();
        Self { fields, values }
    }

    /// Record the value of every configured field present in `obj`.
    /// Absent fields are skipped; DICOMs routinely omit optional attributes.
    pub fn accumulate<T: ElementAccess>(&mut self, obj: &T) {
        for (tag, name) in &self.fields {
            if let Some(value) = obj.element_str(*tag) {
                if let Some(set) = self.values.get_mut(name) {
                    set.insert(value);
                }
            }
        }
    }

    pub fn values_for(&self, field: &str) -> Option<&BTreeSet<String>> {
        self.values.get(field)
    }

    pub fn report(&self, num_dicoms: usize) {
        println!("{num_dicoms} DICOMs found: \n");
        for (name, set) in &self.values {
            let observed: Vec<&str> = set.iter().map(String::as_str).collect();
            println!("{name}: {observed:?}");
        }
    }
}
