//! Registry of supported curves and the fixed-width big-endian field element codec.
//!
//! Every wire-visible object carries a [`CurveId`] discriminator. The registry is a
//! process-wide immutable table; proof and commitment objects never own curve
//! parameters, they look them up through their group type's [`NamedCurve`] binding.

use crate::error::DlogError;
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField};
use ark_std::{
    format,
    string::String,
    vec,
    vec::Vec,
};
use serde::{Deserialize, Serialize};

/// Discriminator for the curves this crate knows about. The numeric values are part
/// of the wire format and must never be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CurveId {
    Secp256k1 = 0,
    Secp256r1 = 1,
    Bls12381G1 = 2,
}

impl CurveId {
    /// Resolve a raw wire discriminator. Anything outside the registry is rejected.
    pub fn from_u8(raw: u8) -> Result<Self, DlogError> {
        match raw {
            0 => Ok(Self::Secp256k1),
            1 => Ok(Self::Secp256r1),
            2 => Ok(Self::Bls12381G1),
            _ => Err(DlogError::UnknownCurve(raw)),
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        curve_params(self).name
    }
}

/// Immutable parameters of a registered curve. Coordinate and scalar widths are the
/// byte sizes used by the fixed-width big-endian encodings of transcript and wire data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    pub id: CurveId,
    pub name: &'static str,
    pub coordinate_bytes: usize,
    pub scalar_bytes: usize,
}

const fn byte_width(modulus_bits: u32) -> usize {
    ((modulus_bits + 7) / 8) as usize
}

static CURVE_REGISTRY: [CurveParams; 3] = [
    CurveParams {
        id: CurveId::Secp256k1,
        name: "secp256k1",
        coordinate_bytes: byte_width(<ark_secp256k1::Fq as PrimeField>::MODULUS_BIT_SIZE),
        scalar_bytes: byte_width(<ark_secp256k1::Fr as PrimeField>::MODULUS_BIT_SIZE),
    },
    CurveParams {
        id: CurveId::Secp256r1,
        name: "secp256r1",
        coordinate_bytes: byte_width(<ark_secp256r1::Fq as PrimeField>::MODULUS_BIT_SIZE),
        scalar_bytes: byte_width(<ark_secp256r1::Fr as PrimeField>::MODULUS_BIT_SIZE),
    },
    CurveParams {
        id: CurveId::Bls12381G1,
        name: "bls12-381-g1",
        coordinate_bytes: byte_width(<ark_bls12_381::Fq as PrimeField>::MODULUS_BIT_SIZE),
        scalar_bytes: byte_width(<ark_bls12_381::Fr as PrimeField>::MODULUS_BIT_SIZE),
    },
];

/// O(1) lookup into the registry.
pub fn curve_params(id: CurveId) -> &'static CurveParams {
    &CURVE_REGISTRY[id as usize]
}

/// Resolve `id` against the group `G` an operation is bound to. This is the single
/// place where a runtime curve id meets the compile-time group type; the curve
/// inferring (`*_bound`) operations and every decoder go through it.
pub fn bind<G: NamedCurve>(id: CurveId) -> Result<&'static CurveParams, DlogError> {
    if id != G::ID {
        return Err(DlogError::CurveMismatch {
            expected: G::ID,
            found: id,
        });
    }
    Ok(curve_params(id))
}

/// An arkworks affine group tied to its registry entry and to the coordinate codec
/// shared by the Fiat-Shamir transcript and the wire schema.
pub trait NamedCurve: AffineRepr {
    const ID: CurveId;

    fn params() -> &'static CurveParams {
        curve_params(Self::ID)
    }

    /// Affine `(x, y)` as fixed-width big-endian bytes. The identity encodes as
    /// all-zero coordinates, which is not a valid affine point on any registered
    /// curve and hence unambiguous.
    fn coordinate_bytes(&self) -> (Vec<u8>, Vec<u8>);

    /// Inverse of [`Self::coordinate_bytes`]. Rejects wrong-length input,
    /// out-of-field coordinates and points that are not on the curve or not in
    /// its prime-order subgroup.
    fn from_coordinate_bytes(x: &[u8], y: &[u8]) -> Result<Self, DlogError>;
}

/// Fixed-width big-endian encoding of a field element. `width` must be at least the
/// byte size of the field's modulus.
pub fn field_to_be_bytes<F: PrimeField>(element: &F, width: usize) -> Vec<u8> {
    let bytes = element.into_bigint().to_bytes_be();
    if bytes.len() >= width {
        // bigint limbs can pad beyond the modulus width with leading zeroes
        bytes[bytes.len() - width..].to_vec()
    } else {
        let mut out = vec![0u8; width - bytes.len()];
        out.extend_from_slice(&bytes);
        out
    }
}

/// Strict inverse of [`field_to_be_bytes`]: the input must be exactly `width` bytes
/// and must encode an integer `<` the field modulus. Anything that would not
/// round-trip bit-identically is rejected.
pub fn field_from_be_bytes<F: PrimeField>(
    bytes: &[u8],
    width: usize,
    curve: CurveId,
) -> Result<F, DlogError> {
    if bytes.len() != width {
        return Err(DlogError::Decode(format!(
            "expected {} byte field element for {}, got {}",
            width,
            curve.name(),
            bytes.len()
        )));
    }
    let element = F::from_be_bytes_mod_order(bytes);
    if field_to_be_bytes(&element, width) != bytes {
        return Err(DlogError::FieldElementOutOfRange(curve));
    }
    Ok(element)
}

/// Scalar as fixed-width big-endian hex, the wire representation of responses
/// and openings.
pub fn scalar_to_hex<G: NamedCurve>(scalar: &G::ScalarField) -> String {
    hex::encode(field_to_be_bytes(scalar, G::params().scalar_bytes))
}

pub fn scalar_from_hex<G: NamedCurve>(encoded: &str) -> Result<G::ScalarField, DlogError> {
    let bytes = hex::decode(encoded)?;
    field_from_be_bytes(&bytes, G::params().scalar_bytes, G::ID)
}

macro_rules! impl_named_curve {
    ($affine: ty, $base: ty, $id: expr) => {
        impl NamedCurve for $affine {
            const ID: CurveId = $id;

            fn coordinate_bytes(&self) -> (Vec<u8>, Vec<u8>) {
                let width = Self::params().coordinate_bytes;
                match self.xy() {
                    Some((x, y)) => (field_to_be_bytes(x, width), field_to_be_bytes(y, width)),
                    None => (vec![0u8; width], vec![0u8; width]),
                }
            }

            fn from_coordinate_bytes(x: &[u8], y: &[u8]) -> Result<Self, DlogError> {
                let width = Self::params().coordinate_bytes;
                if x.len() != width || y.len() != width {
                    return Err(DlogError::Decode(format!(
                        "expected {} byte coordinates for {}, got ({}, {})",
                        width,
                        Self::ID.name(),
                        x.len(),
                        y.len()
                    )));
                }
                if x.iter().all(|b| *b == 0) && y.iter().all(|b| *b == 0) {
                    return Ok(<$affine>::zero());
                }
                let x = field_from_be_bytes::<$base>(x, width, Self::ID)?;
                let y = field_from_be_bytes::<$base>(y, width, Self::ID)?;
                let point = <$affine>::new_unchecked(x, y);
                if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
                    return Err(DlogError::MalformedPoint(Self::ID));
                }
                Ok(point)
            }
        }
    };
}

impl_named_curve!(ark_secp256k1::Affine, ark_secp256k1::Fq, CurveId::Secp256k1);
impl_named_curve!(ark_secp256r1::Affine, ark_secp256r1::Fq, CurveId::Secp256r1);
impl_named_curve!(
    ark_ec::short_weierstrass::Affine<ark_bls12_381::g1::Config>,
    ark_bls12_381::Fq,
    CurveId::Bls12381G1
);
