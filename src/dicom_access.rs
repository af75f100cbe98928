use dicom::core::{Tag, VR};
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::{DefaultDicomObject, InMemDicomObject};

/// Small helper trait to pull values and VRs from different DICOM object shapes.
pub trait ElementAccess {
    fn element_str(&self, tag: Tag) -> Option<String>;
    fn element_vr(&self, tag: Tag) -> Option<VR>;
    fn has_element(&self, tag: Tag) -> bool;
}

impl ElementAccess for DefaultDicomObject {
    fn element_str(&self, tag: Tag) -> Option<String> {
        self.element(tag)
            .ok()
            .and_then(|e| e.to_str().ok())
            .map(|s| s.into_owned())
    }

    fn element_vr(&self, tag: Tag) -> Option<VR> {
        self.element(tag).ok().map(|e| e.header().vr)
    }

    fn has_element(&self, tag: Tag) -> bool {
        self.element(tag).is_ok()
    }
}

impl ElementAccess for InMemDicomObject<StandardDataDictionary> {
    fn element_str(&self, tag: Tag) -> Option<String> {
        self.element(tag)
            .ok()
            .and_then(|e| e.to_str().ok())
            .map(|s| s.into_owned())
    }

    fn element_vr(&self, tag: Tag) -> Option<VR> {
        self.element(tag).ok().map(|e| e.header().vr)
    }

    fn has_element(&self, tag: Tag) -> bool {
        self.element(tag).is_ok()
    }
}
