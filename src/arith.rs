use crate::constants::RSA_2048_MODULUS;
use lazy_static::lazy_static;
use num_bigint::BigUint;

lazy_static! {
    /// The fixed 2048-bit group modulus N, parsed once per process
    pub static ref MODULUS: BigUint = BigUint::parse_bytes(RSA_2048_MODULUS.as_bytes(), 16)
        .expect("Failed to parse modulus");
}

// Modular multiplication over the fixed modulus
pub fn mul_mod(a: &BigUint, b: &BigUint) -> BigUint {
    (a * b) % &*MODULUS
}

// Modular squaring over the fixed modulus
pub fn sqr_mod(a: &BigUint) -> BigUint {
    (a * a) % &*MODULUS
}

// Binary exponentiation. The modulus is explicit because the verifier
// also exponentiates modulo the challenge prime.
pub fn mod_exp(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exp, modulus)
}
