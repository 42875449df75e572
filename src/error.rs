use crate::curve::CurveId;
use ark_serialize::SerializationError;
use ark_std::string::{String, ToString};

/// Failure modes of binding, proving, committing and decoding.
///
/// A failed verification is deliberately not represented here: `verify` and
/// `open` return `false`, which callers must treat as a normal outcome.
#[derive(Debug)]
pub enum DlogError {
    /// The raw curve discriminator does not name a registered curve
    UnknownCurve(u8),
    /// The curve id does not match the group the operation is bound to
    CurveMismatch { expected: CurveId, found: CurveId },
    /// Decoded point is not on the claimed curve or not in its prime-order subgroup
    MalformedPoint(CurveId),
    /// A coordinate or scalar encodes an integer outside its field
    FieldElementOutOfRange(CurveId),
    Decode(String),
    Encode(String),
    Serialization(SerializationError),
}

impl From<SerializationError> for DlogError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}

impl From<hex::FromHexError> for DlogError {
    fn from(e: hex::FromHexError) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<base64::DecodeError> for DlogError {
    fn from(e: base64::DecodeError) -> Self {
        Self::Decode(e.to_string())
    }
}
