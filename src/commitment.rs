//! Hash commitment to a key-generation datum, the commit-reveal companion of the
//! discrete log proof.
//!
//! `commit` hashes a fresh uniform blinding scalar followed by the committed group
//! elements, all under the same fixed-width big-endian encoding as the Fiat-Shamir
//! transcript, so independently written parties agree on the digest. The blinding
//! makes the commitment hiding; the digest makes it binding. A blinding must never
//! be reused for a commitment to a different value, which `commit` guarantees by
//! drawing one per call.

use crate::{
    curve::{field_to_be_bytes, CurveId, NamedCurve},
    serde_utils::CanonicalHex,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The public commitment: a digest over the blinding and the committed points, plus
/// the curve the points live on.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HashCommitment {
    pub digest: Vec<u8>,
    pub curve: CurveId,
}

/// The opening: the blinding scalar, revealed together with the committed value.
/// Zeroized on drop so an unrevealed opening does not linger in memory.
#[serde_as]
#[derive(
    Clone,
    PartialEq,
    Eq,
    Debug,
    CanonicalSerialize,
    CanonicalDeserialize,
    Serialize,
    Deserialize,
    Zeroize,
    ZeroizeOnDrop,
)]
pub struct CommitmentOpening<F: ark_ff::PrimeField>(#[serde_as(as = "CanonicalHex")] pub F);

impl HashCommitment {
    /// Commit to an ordered sequence of group elements with a fresh uniform blinding.
    pub fn commit<G: NamedCurve, D: Digest, R: RngCore>(
        values: &[G],
        rng: &mut R,
    ) -> (Self, CommitmentOpening<G::ScalarField>) {
        let blinding = G::ScalarField::rand(rng);
        Self::commit_with_blinding::<G, D>(values, &blinding)
    }

    /// Commit with a caller-supplied blinding, for deterministic vectors. The caller
    /// must not reuse a blinding across commitments to different values.
    pub fn commit_with_blinding<G: NamedCurve, D: Digest>(
        values: &[G],
        blinding: &G::ScalarField,
    ) -> (Self, CommitmentOpening<G::ScalarField>) {
        (
            Self::compute::<G, D>(blinding, values),
            CommitmentOpening(*blinding),
        )
    }

    /// Check the opening against the revealed value. A pure recomputation; `false`
    /// is a normal outcome. Fails closed when the value lives on another curve than
    /// the commitment claims.
    pub fn open<G: NamedCurve, D: Digest>(
        &self,
        opening: &CommitmentOpening<G::ScalarField>,
        values: &[G],
    ) -> bool {
        if self.curve != G::ID {
            return false;
        }
        Self::compute::<G, D>(&opening.0, values).digest == self.digest
    }

    fn compute<G: NamedCurve, D: Digest>(blinding: &G::ScalarField, values: &[G]) -> Self {
        let mut hasher = D::new();
        hasher.update(field_to_be_bytes(blinding, G::params().scalar_bytes));
        for value in values {
            let (x, y) = value.coordinate_bytes();
            hasher.update(&x);
            hasher.update(&y);
        }
        Self {
            digest: hasher.finalize().to_vec(),
            curve: G::ID,
        }
    }
}
