//! Wire schema, base64 and JSON encodings shared by every proof and commitment type.
//!
//! The schema types are the logical field layout of the wire format: group elements
//! become an `(x, y)` pair of fixed-width big-endian hex strings plus a curve
//! discriminator, scalars become a big-endian hex string. The binary encoding is the
//! schema as a MessagePack named map, base64 wraps those bytes with standard padding,
//! and JSON mirrors the field names (pretty printed on output; compact input and
//! unknown fields are accepted, missing fields are not). Every decoder re-resolves
//! the curve id and validates the decoded material; nothing partial escapes.

use crate::{
    commitment::HashCommitment,
    curve::{bind, scalar_from_hex, scalar_to_hex, CurveId, NamedCurve},
    discrete_log::DlogProof,
    error::DlogError,
};
use ark_std::{
    string::{String, ToString},
    vec::Vec,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Wire layout of a group element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePointSchema {
    /// Fixed-width big-endian hex of the affine x coordinate
    pub x: String,
    /// Fixed-width big-endian hex of the affine y coordinate
    pub y: String,
    #[serde(rename = "curveType")]
    pub curve_type: u8,
}

impl CurvePointSchema {
    pub fn encode<G: NamedCurve>(point: &G) -> Self {
        let (x, y) = point.coordinate_bytes();
        Self {
            x: hex::encode(x),
            y: hex::encode(y),
            curve_type: G::ID.as_u8(),
        }
    }

    pub fn decode<G: NamedCurve>(&self) -> Result<G, DlogError> {
        let id = CurveId::from_u8(self.curve_type)?;
        bind::<G>(id)?;
        let x = hex::decode(&self.x)?;
        let y = hex::decode(&self.y)?;
        G::from_coordinate_bytes(&x, &y)
    }
}

/// Wire layout of a [`DlogProof`]. The salt is deliberately absent: it is local
/// domain separation state, not transported material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DlogProofSchema {
    pub a: CurvePointSchema,
    pub z: String,
}

/// Wire layout of a [`HashCommitment`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashCommitmentSchema {
    pub digest: String,
    #[serde(rename = "curveType")]
    pub curve_type: u8,
}

/// The serialization contract every proof/commitment type satisfies: a lossless
/// mapping to its wire schema, with provided binary, base64 and JSON codecs on top.
pub trait WireSerialize: Sized {
    type Schema: Serialize + DeserializeOwned;

    fn to_wire(&self) -> Self::Schema;

    fn from_wire(schema: &Self::Schema) -> Result<Self, DlogError>;

    fn to_bytes(&self) -> Result<Vec<u8>, DlogError> {
        rmp_serde::to_vec_named(&self.to_wire()).map_err(|e| DlogError::Encode(e.to_string()))
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, DlogError> {
        let schema: Self::Schema =
            rmp_serde::from_slice(bytes).map_err(|e| DlogError::Decode(e.to_string()))?;
        Self::from_wire(&schema)
    }

    fn to_base64(&self) -> Result<String, DlogError> {
        Ok(BASE64.encode(self.to_bytes()?))
    }

    fn from_base64(encoded: &str) -> Result<Self, DlogError> {
        let bytes = BASE64.decode(encoded.as_bytes())?;
        Self::from_bytes(&bytes)
    }

    fn to_json(&self) -> Result<String, DlogError> {
        serde_json::to_string_pretty(&self.to_wire()).map_err(|e| DlogError::Encode(e.to_string()))
    }

    fn from_json(json: &str) -> Result<Self, DlogError> {
        let schema: Self::Schema =
            serde_json::from_str(json).map_err(|e| DlogError::Decode(e.to_string()))?;
        Self::from_wire(&schema)
    }
}

impl<G: NamedCurve> WireSerialize for DlogProof<G> {
    type Schema = DlogProofSchema;

    fn to_wire(&self) -> DlogProofSchema {
        DlogProofSchema {
            a: CurvePointSchema::encode(&self.a),
            z: scalar_to_hex::<G>(&self.z),
        }
    }

    fn from_wire(schema: &DlogProofSchema) -> Result<Self, DlogError> {
        let a = schema.a.decode::<G>()?;
        let z = scalar_from_hex::<G>(&schema.z)?;
        Ok(DlogProof {
            a,
            z,
            curve: G::ID,
            salt: None,
        })
    }
}

impl WireSerialize for HashCommitment {
    type Schema = HashCommitmentSchema;

    fn to_wire(&self) -> HashCommitmentSchema {
        HashCommitmentSchema {
            digest: hex::encode(&self.digest),
            curve_type: self.curve.as_u8(),
        }
    }

    fn from_wire(schema: &HashCommitmentSchema) -> Result<Self, DlogError> {
        let curve = CurveId::from_u8(schema.curve_type)?;
        let digest = hex::decode(&schema.digest)?;
        if digest.is_empty() {
            return Err(DlogError::Decode("empty commitment digest".to_string()));
        }
        Ok(HashCommitment { digest, curve })
    }
}
