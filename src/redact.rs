use dicom::core::value::PrimitiveValue;
use dicom::core::VR;

/// Marker written into textual and binary fields.
pub const REDACTED_TEXT: &str = "REDACTED";
/// Fixed placeholder for date fields; keeps downstream date parsers working.
pub const REDACTED_DATE: &str = "00010101";

/// Replacement value for a scrubbed element, chosen by value representation family.
///
/// Returns `None` for VRs the policy has no rule for; the caller reports those
/// and leaves the element unmodified rather than aborting the batch.
pub fn redacted_value(vr: VR) -> Option<PrimitiveValue> {
    let value = match vr {
        // Text family collapses to a single marker string.
        VR::LO
        | VR::SH
        | VR::PN
        | VR::LT
        | VR::ST
        | VR::UT
        | VR::TM
        | VR::DT
        | VR::CS
        | VR::UI => PrimitiveValue::from(REDACTED_TEXT),
        VR::DA => PrimitiveValue::from(REDACTED_DATE),
        // IS and DS are numeric but string-encoded on the wire.
        VR::IS => PrimitiveValue::from("0"),
        VR::DS => PrimitiveValue::from("0.0"),
        VR::SS => PrimitiveValue::from(0_i16),
        VR::US => PrimitiveValue::from(0_u16),
        VR::SL => PrimitiveValue::from(0_i32),
        VR::UL => PrimitiveValue::from(0_u32),
        VR::FL => PrimitiveValue::from(0.0_f32),
        VR::FD => PrimitiveValue::from(0.0_f64),
        VR::OB | VR::OW | VR::UN => PrimitiveValue::from(REDACTED_TEXT.as_bytes().to_vec()),
        _ => return None,
    };
    Some(value)
}
