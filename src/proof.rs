use crate::arith;
use crate::error::PyxResult;
use crate::progress::Monitor;
use num_bigint::BigUint;
use num_traits::One;

/// Compute pi = x^floor(2^T / L) mod N in a single pass of T iterations.
///
/// The quotient bits of 2^T / L arise MSB-first from long division. The
/// remainder starts at 1 (the dividend's leading 1 bit, already below L)
/// and each step shifts in one of the T remaining zero bits. Running
/// square-then-conditional-multiply over that bit stream is Horner's rule
/// for x^q, so the whole working state is two residues mod N and one
/// residue mod L. After the loop the remainder equals 2^T mod L; the
/// verifier re-derives it independently.
pub fn prove(
    x: &BigUint,
    iterations: u64,
    l: &BigUint,
    monitor: &mut Monitor,
) -> PyxResult<BigUint> {
    let mut remainder = BigUint::one();
    let mut proof = BigUint::one();

    for i in 0..iterations {
        let doubled = remainder << 1;
        proof = arith::sqr_mod(&proof);
        if doubled >= *l {
            // Quotient bit is 1: reduce the remainder and fold x in
            remainder = doubled - l;
            proof = arith::mul_mod(&proof, x);
        } else {
            remainder = doubled;
        }
        monitor.step(i + 1, iterations)?;
    }

    Ok(proof)
}
