//! Non-interactive Schnorr proof of knowledge of a discrete log.
//!
//! Given public `X` and the curve's generator `G`, prove knowledge of `x` in `G * x = X`:
//! 1. Prover draws a uniform random `alpha` and computes `A = G * alpha`
//! 2. Both sides derive the challenge `e` by hashing `G`, `A` and `X` (plus an optional
//!    domain separation salt) as described in [`crate::challenge`].
//! 3. Prover sends `(A, z)` with `z = alpha + e * x`.
//! 4. Verifier checks `G * z == A + X * e`.
//!
//! The salt is local state agreed between the parties (e.g. a session id); it is set
//! before proving or verifying and is not carried by the wire encoding.

use crate::{
    challenge::{challenge_contribution, dlog_challenge},
    curve::{bind, CurveId, NamedCurve},
    error::DlogError,
    serde_utils::CanonicalHex,
};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{io::Write, rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Prover-side state of the Schnorr identification protocol. Secret material is
/// zeroized on drop.
#[serde_as]
#[derive(
    Default,
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
pub struct DlogProtocol<G: NamedCurve> {
    /// Commitment to the prover's randomness, `A = G * blinding`
    #[zeroize(skip)]
    #[serde_as(as = "CanonicalHex")]
    pub t: G,
    /// Randomness chosen by the prover
    #[serde_as(as = "CanonicalHex")]
    blinding: G::ScalarField,
    /// Prover's secret `x`
    #[serde_as(as = "CanonicalHex")]
    witness: G::ScalarField,
}

/// Non-interactive proof of knowledge of a discrete log with respect to the
/// canonical generator of the curve identified by `curve`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DlogProof<G: NamedCurve> {
    /// Prover's commitment `A = G * alpha`
    pub a: G,
    /// Response `z = alpha + e * x` mod the group order
    pub z: G::ScalarField,
    /// Curve the proof is bound to; locally produced proofs always carry `G::ID`
    pub curve: CurveId,
    /// Domain separation salt fed to the challenge. Not part of the wire encoding;
    /// a verifier installs its own expectation with [`Self::set_salt`].
    pub salt: Option<Vec<u8>>,
}

impl<G: NamedCurve> DlogProtocol<G> {
    /// Step 1: `A = G * blinding` over the canonical generator.
    pub fn init(witness: G::ScalarField, blinding: G::ScalarField) -> Self {
        let t = G::generator()
            .mul_bigint(blinding.into_bigint())
            .into_affine();
        Self {
            t,
            blinding,
            witness,
        }
    }

    pub fn challenge_contribution<W: Write>(
        &self,
        x_pub: &G,
        salt: Option<&[u8]>,
        writer: W,
    ) -> Result<(), DlogError> {
        challenge_contribution(&[G::generator(), self.t, *x_pub], salt, writer)
    }

    /// Step 3: `z = blinding + challenge * witness`.
    pub fn gen_proof(self, challenge: &G::ScalarField, salt: Option<Vec<u8>>) -> DlogProof<G> {
        let z = self.blinding + (self.witness * *challenge);
        DlogProof {
            a: self.t,
            z,
            curve: G::ID,
            salt,
        }
    }
}

impl<G: NamedCurve> DlogProof<G> {
    /// `X = G * witness`, the public statement the proof is about.
    pub fn public_point(witness: &G::ScalarField) -> G {
        G::generator()
            .mul_bigint(witness.into_bigint())
            .into_affine()
    }

    /// Prove knowledge of `witness`, drawing the nonce from `rng`. The nonce is drawn
    /// fresh on every call; it must come from a cryptographically secure source, and
    /// reusing one across two proofs of the same statement leaks the witness.
    pub fn prove<D: Digest, R: RngCore>(
        witness: &G::ScalarField,
        salt: Option<Vec<u8>>,
        rng: &mut R,
    ) -> Self {
        let alpha = G::ScalarField::rand(rng);
        Self::prove_with_randomness::<D>(witness, &alpha, salt)
    }

    /// Like [`Self::prove`] but with a caller-supplied nonce, for deterministic test
    /// vectors and protocols that pre-commit to `A`. The caller is responsible for
    /// the nonce being uniform, secret and never reused.
    pub fn prove_with_randomness<D: Digest>(
        witness: &G::ScalarField,
        alpha: &G::ScalarField,
        salt: Option<Vec<u8>>,
    ) -> Self {
        let protocol = DlogProtocol::init(*witness, *alpha);
        let x_pub = Self::public_point(witness);
        let e = dlog_challenge::<G, D>(&protocol.t, &x_pub, salt.as_deref());
        protocol.gen_proof(&e, salt)
    }

    /// Resolve `curve` against `G` and prove: the curve-inferring composite of
    /// [`crate::curve::bind`] and [`Self::prove`].
    pub fn prove_bound<D: Digest, R: RngCore>(
        curve: CurveId,
        witness: &G::ScalarField,
        salt: Option<Vec<u8>>,
        rng: &mut R,
    ) -> Result<Self, DlogError> {
        bind::<G>(curve)?;
        Ok(Self::prove::<D, R>(witness, salt, rng))
    }

    /// Resolve `curve` against `G` and prove with a caller-supplied nonce.
    pub fn prove_bound_with_randomness<D: Digest>(
        curve: CurveId,
        witness: &G::ScalarField,
        alpha: &G::ScalarField,
        salt: Option<Vec<u8>>,
    ) -> Result<Self, DlogError> {
        bind::<G>(curve)?;
        Ok(Self::prove_with_randomness::<D>(witness, alpha, salt))
    }

    /// Replace the domain separation salt used by [`Self::verify`].
    pub fn set_salt(&mut self, salt: Option<Vec<u8>>) {
        self.salt = salt;
    }

    pub fn challenge_contribution<W: Write>(&self, x_pub: &G, writer: W) -> Result<(), DlogError> {
        challenge_contribution(&[G::generator(), self.a, *x_pub], self.salt.as_deref(), writer)
    }

    /// `G * z - X * e == A`. Returns `false` for a proof bound to a different curve
    /// than `x_pub`'s; a mismatched proof is a normal outcome, never an error.
    pub fn verify<D: Digest>(&self, x_pub: &G) -> bool {
        if self.curve != G::ID {
            return false;
        }
        let e = dlog_challenge::<G, D>(&self.a, x_pub, self.salt.as_deref());
        let mut expected = G::generator().mul_bigint(self.z.into_bigint());
        expected -= x_pub.mul_bigint(e.into_bigint());
        expected.into_affine() == self.a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::WireSerialize;
    use ark_ff::{One, Zero};
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        vec,
    };
    use sha2::Sha256;

    macro_rules! check_completeness {
        ($affine: ty) => {{
            let mut rng = StdRng::seed_from_u64(0u64);
            type Fr = <$affine as AffineRepr>::ScalarField;

            for witness in [
                Fr::rand(&mut rng),
                Fr::zero(),
                -Fr::one(),
            ] {
                let x_pub = DlogProof::<$affine>::public_point(&witness);

                let proof = DlogProof::<$affine>::prove::<Sha256, _>(&witness, None, &mut rng);
                assert_eq!(proof.curve, <$affine>::ID);
                assert!(proof.verify::<Sha256>(&x_pub));

                let salted = DlogProof::<$affine>::prove::<Sha256, _>(
                    &witness,
                    Some(b"ceremony".to_vec()),
                    &mut rng,
                );
                assert!(salted.verify::<Sha256>(&x_pub));

                // alpha = 0 is in range and must work
                let degenerate = DlogProof::<$affine>::prove_with_randomness::<Sha256>(
                    &witness,
                    &Fr::zero(),
                    None,
                );
                assert!(degenerate.verify::<Sha256>(&x_pub));
            }
        }};
    }

    #[test]
    fn completeness() {
        check_completeness!(ark_secp256k1::Affine);
        check_completeness!(ark_secp256r1::Affine);
        check_completeness!(ark_bls12_381::G1Affine);
    }

    #[test]
    fn soundness() {
        type A = ark_secp256k1::Affine;
        type Fr = ark_secp256k1::Fr;
        let mut rng = StdRng::seed_from_u64(1u64);

        let witness = Fr::rand(&mut rng);
        let x_pub = DlogProof::<A>::public_point(&witness);
        let proof = DlogProof::<A>::prove::<Sha256, _>(&witness, None, &mut rng);
        assert!(proof.verify::<Sha256>(&x_pub));

        // tampered response
        let mut bad = proof.clone();
        bad.z += Fr::one();
        assert!(!bad.verify::<Sha256>(&x_pub));

        // wrong statement
        let wrong = DlogProof::<A>::public_point(&(witness + Fr::one()));
        assert!(!proof.verify::<Sha256>(&wrong));

        // tampered commitment
        let mut bad = proof.clone();
        bad.a = <A as AffineRepr>::Group::rand(&mut rng).into_affine();
        assert!(!bad.verify::<Sha256>(&x_pub));
    }

    #[test]
    fn salt_binding() {
        type A = ark_secp256k1::Affine;
        type Fr = ark_secp256k1::Fr;
        let mut rng = StdRng::seed_from_u64(2u64);

        let witness = Fr::rand(&mut rng);
        let x_pub = DlogProof::<A>::public_point(&witness);

        let mut proof =
            DlogProof::<A>::prove::<Sha256, _>(&witness, Some(b"round-1".to_vec()), &mut rng);
        assert!(proof.verify::<Sha256>(&x_pub));

        proof.set_salt(Some(b"round-2".to_vec()));
        assert!(!proof.verify::<Sha256>(&x_pub));
        proof.set_salt(None);
        assert!(!proof.verify::<Sha256>(&x_pub));
        proof.set_salt(Some(b"round-1".to_vec()));
        assert!(proof.verify::<Sha256>(&x_pub));

        // absent and empty salt are the same transcript
        let mut unsalted = DlogProof::<A>::prove::<Sha256, _>(&witness, None, &mut rng);
        unsalted.set_salt(Some(vec![]));
        assert!(unsalted.verify::<Sha256>(&x_pub));
    }

    #[test]
    fn verification_fails_closed_on_curve_mismatch() {
        type A = ark_secp256k1::Affine;
        type Fr = ark_secp256k1::Fr;
        let mut rng = StdRng::seed_from_u64(3u64);

        let witness = Fr::rand(&mut rng);
        let x_pub = DlogProof::<A>::public_point(&witness);
        let mut proof = DlogProof::<A>::prove::<Sha256, _>(&witness, None, &mut rng);
        proof.curve = CurveId::Secp256r1;
        assert!(!proof.verify::<Sha256>(&x_pub));
    }

    #[test]
    fn curve_binding_variants() {
        type A = ark_secp256k1::Affine;
        type Fr = ark_secp256k1::Fr;
        let mut rng = StdRng::seed_from_u64(4u64);
        let witness = Fr::rand(&mut rng);
        let x_pub = DlogProof::<A>::public_point(&witness);

        let proof =
            DlogProof::<A>::prove_bound::<Sha256, _>(CurveId::Secp256k1, &witness, None, &mut rng)
                .unwrap();
        assert!(proof.verify::<Sha256>(&x_pub));

        assert!(matches!(
            DlogProof::<A>::prove_bound::<Sha256, _>(CurveId::Bls12381G1, &witness, None, &mut rng),
            Err(DlogError::CurveMismatch { .. })
        ));
        assert!(matches!(
            DlogProof::<A>::prove_bound_with_randomness::<Sha256>(
                CurveId::Secp256r1,
                &witness,
                &Fr::rand(&mut rng),
                None
            ),
            Err(DlogError::CurveMismatch { .. })
        ));
    }

    #[test]
    fn known_nonce_scenario() {
        type A = ark_secp256k1::Affine;
        type Fr = ark_secp256k1::Fr;

        let witness = Fr::from(12345u64);
        let alpha = Fr::from(67890u64);
        let proof = DlogProof::<A>::prove_with_randomness::<Sha256>(&witness, &alpha, None);

        let g = A::generator();
        assert_eq!(proof.a, g.mul_bigint(alpha.into_bigint()).into_affine());

        let x_pub = DlogProof::<A>::public_point(&witness);
        let e = dlog_challenge::<A, Sha256>(&proof.a, &x_pub, None);
        assert_eq!(proof.z, alpha + e * witness);

        // re-check the verification equation with the raw group arithmetic
        let lhs = g.mul_bigint(proof.z.into_bigint());
        let rhs = proof.a.into_group() + x_pub.mul_bigint(e.into_bigint());
        assert_eq!(lhs.into_affine(), rhs.into_affine());
        assert!(proof.verify::<Sha256>(&x_pub));

        // proving is fully deterministic given the nonce, down to the wire bytes
        let again = DlogProof::<A>::prove_with_randomness::<Sha256>(&witness, &alpha, None);
        assert_eq!(proof, again);
        assert_eq!(proof.to_bytes().unwrap(), again.to_bytes().unwrap());
    }

    #[test]
    fn protocol_state_serialization() {
        type A = ark_secp256k1::Affine;
        type Fr = ark_secp256k1::Fr;
        let mut rng = StdRng::seed_from_u64(5u64);

        let protocol = DlogProtocol::<A>::init(Fr::rand(&mut rng), Fr::rand(&mut rng));

        let encoded = serde_json::to_string(&protocol).unwrap();
        let decoded: DlogProtocol<A> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, protocol);

        let mut bytes = vec![];
        protocol.serialize_compressed(&mut bytes).unwrap();
        let decoded = DlogProtocol::<A>::deserialize_compressed(&bytes[..]).unwrap();
        assert_eq!(decoded, protocol);
    }
}
