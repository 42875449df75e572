#![cfg_attr(not(feature = "std"), no_std)]

//! Non-interactive Schnorr proof of knowledge of a discrete log, and a companion hash
//! commitment, as building blocks for multi-party protocols like distributed key
//! generation and threshold signing. Refer <https://crypto.stanford.edu/cs355/19sp/lec5.pdf>
//!
//! To prove knowledge of `x` in `G * x = X` for the canonical generator `G`:
//! 1. Prover draws a uniform random `alpha` and computes `A = G * alpha`.
//! 2. The challenge `e` is derived by hashing the fixed-width big-endian coordinates of
//!    `G`, `A` and `X`, plus an optional domain separation salt (Fiat-Shamir).
//! 3. Prover sends `(A, z)` where `z = alpha + e * x`.
//! 4. Verifier re-derives `e` and checks `G * z == A + X * e`.
//!
//! Proofs and commitments are bound to a curve from the immutable [`curve`] registry
//! and cross the wire through the shared [`serialization`] contract (typed schema,
//! base64, JSON). All operations are synchronous and free of shared mutable state;
//! distinct objects can be proved and verified from many threads, and the prover's
//! randomness source is whatever `RngCore` the caller hands in.

pub mod challenge;
pub mod commitment;
pub mod curve;
pub mod discrete_log;
pub mod error;
pub mod serde_utils;
pub mod serialization;

pub use crate::{
    challenge::{challenge_contribution, compute_challenge, dlog_challenge},
    commitment::{CommitmentOpening, HashCommitment},
    curve::{bind, curve_params, CurveId, CurveParams, NamedCurve},
    discrete_log::{DlogProof, DlogProtocol},
    error::DlogError,
    serialization::{
        CurvePointSchema, DlogProofSchema, HashCommitmentSchema, WireSerialize,
    },
};
