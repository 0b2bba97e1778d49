use crate::arith::MODULUS;
use crate::codec;
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

// SHA-256 over a contiguous byte sequence
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Derive the group base x from the mint inputs.
///
/// Hashes the 72-byte string `minterId || challenge || u64BE(T)` and
/// reduces the 256-bit digest into [0, N). Collisions with 0 or 1 are
/// cryptographically negligible and not rejected.
pub fn derive_base(minter_id: &[u8; 32], challenge: &[u8; 32], iterations: u64) -> BigUint {
    let mut hasher = Sha256::new();
    hasher.update(minter_id);
    hasher.update(challenge);
    hasher.update(codec::u64_be(iterations));
    let digest = hasher.finalize();
    codec::bytes_to_int(&digest) % &*MODULUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_sha256_known_digest() {
        // SHA-256 of the empty string
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_derive_base_known_vector() {
        let x = derive_base(&[0x01; 32], &[0x02; 32], 50_000);
        assert_eq!(
            hex::encode(codec::int_to_bytes(&x)),
            "e80de80f6dde14cd2dd9690f3e2215b4609810bd35a10d531095c314883dfd16"
        );
    }

    #[test]
    fn test_derive_base_is_deterministic() {
        let a = derive_base(&[7u8; 32], &[9u8; 32], 42);
        let b = derive_base(&[7u8; 32], &[9u8; 32], 42);
        assert_eq!(a, b, "derive_base must be a pure function of its inputs");
    }

    #[test]
    fn test_derive_base_binds_iteration_count() {
        let a = derive_base(&[7u8; 32], &[9u8; 32], 42);
        let b = derive_base(&[7u8; 32], &[9u8; 32], 43);
        assert_ne!(a, b, "changing T must change the base");
    }

    #[test]
    fn test_derive_base_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let minter_id: [u8; 32] = rng.gen();
            let challenge: [u8; 32] = rng.gen();
            let x = derive_base(&minter_id, &challenge, rng.gen_range(1..u64::MAX));
            assert!(x < *MODULUS, "base must be reduced into [0, N)");
        }
    }
}
