use crate::arith;
use crate::error::PyxResult;
use crate::progress::Monitor;
use num_bigint::BigUint;

/// Evaluate y = x^(2^T) mod N by exactly T sequential squarings.
///
/// The squaring chain is the wall-clock core of the VDF and must never be
/// parallelized across the T axis; only progress reporting is batched.
pub fn evaluate(x: &BigUint, iterations: u64, monitor: &mut Monitor) -> PyxResult<BigUint> {
    let mut y = x.clone();
    for i in 0..iterations {
        y = arith::sqr_mod(&y);
        monitor.step(i + 1, iterations)?;
    }
    Ok(y)
}
