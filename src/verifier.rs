use crate::arith::{self, MODULUS};
use crate::hashing;
use crate::prime;
use crate::pyx::Pyx;
use log::debug;
use num_bigint::BigUint;

/// Why a verification failed. Cryptographic failure is a verdict, not an
/// error: `verify` never returns `Err`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyFailure {
    /// The identity pi^L * x^r = y (mod N) did not hold
    ProofMismatch,
    /// The container violated a structural invariant
    MalformedPyx,
}

/// Outcome of a verification pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verification {
    pub valid: bool,
    pub error: Option<VerifyFailure>,
}

impl Verification {
    fn ok() -> Self {
        Verification {
            valid: true,
            error: None,
        }
    }

    fn failed(error: VerifyFailure) -> Self {
        Verification {
            valid: false,
            error: Some(error),
        }
    }
}

/// Verify a Pyx in time independent of T.
///
/// Re-derives x from the public inputs and L from y, computes
/// r = 2^T mod L, and accepts iff pi^L * x^r = y (mod N). No secret
/// material is touched.
pub fn verify(pyx: &Pyx) -> Verification {
    if pyx.iterations() < 1 || pyx.y() >= &*MODULUS || pyx.proof() >= &*MODULUS {
        return Verification::failed(VerifyFailure::MalformedPyx);
    }

    let x = hashing::derive_base(pyx.minter_id(), pyx.challenge(), pyx.iterations());
    let l = prime::derive_challenge_prime(pyx.y());

    let r = arith::mod_exp(
        &BigUint::from(2u32),
        &BigUint::from(pyx.iterations()),
        &l,
    );
    let lhs = arith::mul_mod(
        &arith::mod_exp(pyx.proof(), &l, &MODULUS),
        &arith::mod_exp(&x, &r, &MODULUS),
    );

    if lhs == *pyx.y() {
        Verification::ok()
    } else {
        debug!("proof identity failed for pyx {}", pyx.pyx_id_hex());
        Verification::failed(VerifyFailure::ProofMismatch)
    }
}
