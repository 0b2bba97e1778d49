use crate::arith::MODULUS;
use crate::codec;
use crate::constants::{ID_LEN, RESIDUE_LEN, SERIALIZED_LEN, VERSION};
use crate::error::{PyxError, PyxResult};
use crate::hashing;
use num_bigint::BigUint;

/// A minted artifact binding a minter identity, a challenge, the iteration
/// count, the VDF output y, and the Wesolowski proof pi.
///
/// All fields are immutable once set; the canonical byte layout and the
/// derived pyxId are pure functions of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pyx {
    version: u8,
    minter_id: [u8; ID_LEN],
    challenge: [u8; ID_LEN],
    iterations: u64,
    y: BigUint,
    proof: BigUint,
}

impl Pyx {
    /// Assemble a Pyx from final field values, enforcing the structural
    /// invariants of the wire format.
    pub fn new(
        minter_id: [u8; ID_LEN],
        challenge: [u8; ID_LEN],
        iterations: u64,
        y: BigUint,
        proof: BigUint,
    ) -> PyxResult<Self> {
        if iterations < 1 {
            return Err(PyxError::MalformedPyx(
                "iterations must be at least 1".to_string(),
            ));
        }
        if y >= *MODULUS || proof >= *MODULUS {
            return Err(PyxError::MalformedPyx("residue out of range".to_string()));
        }
        Ok(Pyx {
            version: VERSION,
            minter_id,
            challenge,
            iterations,
            y,
            proof,
        })
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn minter_id(&self) -> &[u8; ID_LEN] {
        &self.minter_id
    }

    pub fn challenge(&self) -> &[u8; ID_LEN] {
        &self.challenge
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    pub fn proof(&self) -> &BigUint {
        &self.proof
    }

    /// Canonical 585-byte serialization: version, minterId, challenge,
    /// u64BE iterations, then y and pi zero-padded to 2048 bits each.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SERIALIZED_LEN);
        out.push(self.version);
        out.extend_from_slice(&self.minter_id);
        out.extend_from_slice(&self.challenge);
        out.extend_from_slice(&codec::u64_be(self.iterations));
        out.extend_from_slice(&fixed_residue(&self.y));
        out.extend_from_slice(&fixed_residue(&self.proof));
        out
    }

    /// Parse the canonical layout, reporting `MalformedPyx` on any
    /// structural violation.
    pub fn deserialize(bytes: &[u8]) -> PyxResult<Pyx> {
        if bytes.len() != SERIALIZED_LEN {
            return Err(PyxError::MalformedPyx(format!(
                "expected {} bytes, got {}",
                SERIALIZED_LEN,
                bytes.len()
            )));
        }
        if bytes[0] != VERSION {
            return Err(PyxError::MalformedPyx(format!(
                "unsupported version byte 0x{:02x}",
                bytes[0]
            )));
        }

        let mut minter_id = [0u8; ID_LEN];
        minter_id.copy_from_slice(&bytes[1..1 + ID_LEN]);
        let mut challenge = [0u8; ID_LEN];
        challenge.copy_from_slice(&bytes[1 + ID_LEN..1 + 2 * ID_LEN]);

        let mut iter_bytes = [0u8; 8];
        iter_bytes.copy_from_slice(&bytes[65..73]);
        let iterations = u64::from_be_bytes(iter_bytes);

        let y = codec::bytes_to_int(&bytes[73..73 + RESIDUE_LEN]);
        let proof = codec::bytes_to_int(&bytes[73 + RESIDUE_LEN..SERIALIZED_LEN]);

        Pyx::new(minter_id, challenge, iterations, y, proof)
    }

    /// SHA-256 fingerprint of the canonical serialization.
    pub fn pyx_id(&self) -> [u8; 32] {
        hashing::sha256(&self.serialize())
    }

    // Hex rendering of the fingerprint, for logs and display
    pub fn pyx_id_hex(&self) -> String {
        hex::encode(self.pyx_id())
    }
}

// Residues are < N by construction, so they always fit the 256-byte field
fn fixed_residue(value: &BigUint) -> Vec<u8> {
    codec::int_to_fixed_bytes(value, RESIDUE_LEN)
        .expect("residue bounded by the 2048-bit modulus")
}
