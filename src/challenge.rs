//! Fiat-Shamir challenge derivation.
//!
//! The transcript is the concatenation of each point's affine `(x, y)` coordinates as
//! fixed-width big-endian bytes, in protocol order, followed by the raw salt bytes when
//! a non-empty salt is present. The digest is interpreted as a big-endian unsigned
//! integer and reduced modulo the group order. Prover and verifier must feed points in
//! the same order; a divergence makes proofs fail to verify, it is not detectable as
//! an error.

use crate::{curve::NamedCurve, error::DlogError};
use ark_ff::PrimeField;
use ark_serialize::SerializationError;
use ark_std::io::Write;
use digest::Digest;

/// Stream the transcript of `points` (and optional salt) into `writer`, for callers
/// that combine several contributions before hashing.
pub fn challenge_contribution<G: NamedCurve, W: Write>(
    points: &[G],
    salt: Option<&[u8]>,
    mut writer: W,
) -> Result<(), DlogError> {
    for point in points {
        let (x, y) = point.coordinate_bytes();
        writer
            .write_all(&x)
            .map_err(|e| DlogError::Serialization(SerializationError::IoError(e)))?;
        writer
            .write_all(&y)
            .map_err(|e| DlogError::Serialization(SerializationError::IoError(e)))?;
    }
    if let Some(salt) = salt {
        if !salt.is_empty() {
            writer
                .write_all(salt)
                .map_err(|e| DlogError::Serialization(SerializationError::IoError(e)))?;
        }
    }
    Ok(())
}

/// Hash the transcript of `points` and optional salt to a scalar. An absent and an
/// empty salt produce the same challenge.
pub fn compute_challenge<G: NamedCurve, D: Digest>(
    points: &[G],
    salt: Option<&[u8]>,
) -> G::ScalarField {
    let mut hasher = D::new();
    for point in points {
        let (x, y) = point.coordinate_bytes();
        hasher.update(&x);
        hasher.update(&y);
    }
    if let Some(salt) = salt {
        if !salt.is_empty() {
            hasher.update(salt);
        }
    }
    G::ScalarField::from_be_bytes_mod_order(&hasher.finalize())
}

/// Challenge for the discrete log proof: transcript order is fixed as
/// `G.x, G.y, A.x, A.y, X.x, X.y [, salt]`.
pub fn dlog_challenge<G: NamedCurve, D: Digest>(
    a: &G,
    x_pub: &G,
    salt: Option<&[u8]>,
) -> G::ScalarField {
    compute_challenge::<G, D>(&[G::generator(), *a, *x_pub], salt)
}
