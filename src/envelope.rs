use crate::codec;
use crate::error::{PyxError, PyxResult};
use crate::pyx::Pyx;
use base64::{engine::general_purpose, Engine as _};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

// Decoded-size cap for the y and proof fields
const MAX_RESIDUE_BYTES: usize = 512;

/// JSON interchange envelope: Base64 byte fields, decimal iterations.
///
/// Interchange only: the canonical 585-byte layout is the consensus
/// surface, and `pyxId` here is advisory. Integer fields carry their
/// minimum-length encodings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PyxEnvelope {
    #[serde(rename = "pyxId", default, skip_serializing_if = "Option::is_none")]
    pub pyx_id: Option<String>,
    #[serde(rename = "minterId")]
    pub minter_id: String,
    pub challenge: String,
    pub iterations: u64,
    pub y: String,
    pub proof: String,
}

impl PyxEnvelope {
    pub fn from_pyx(pyx: &Pyx) -> Self {
        PyxEnvelope {
            pyx_id: Some(general_purpose::STANDARD.encode(pyx.pyx_id())),
            minter_id: general_purpose::STANDARD.encode(pyx.minter_id()),
            challenge: general_purpose::STANDARD.encode(pyx.challenge()),
            iterations: pyx.iterations(),
            y: general_purpose::STANDARD.encode(codec::int_to_bytes(pyx.y())),
            proof: general_purpose::STANDARD.encode(codec::int_to_bytes(pyx.proof())),
        }
    }

    /// Validate the envelope and rebuild the Pyx it describes.
    pub fn to_pyx(&self) -> PyxResult<Pyx> {
        let minter_id = decode_id(&self.minter_id, "minterId")?;
        let challenge = decode_id(&self.challenge, "challenge")?;
        if self.iterations < 1 {
            return Err(PyxError::MalformedPyx(
                "iterations must be a positive integer".to_string(),
            ));
        }
        let y = decode_residue(&self.y, "y")?;
        let proof = decode_residue(&self.proof, "proof")?;
        Pyx::new(minter_id, challenge, self.iterations, y, proof)
    }

    pub fn to_json(&self) -> PyxResult<String> {
        serde_json::to_string(self)
            .map_err(|e| PyxError::Internal(format!("envelope serialization: {}", e)))
    }

    pub fn from_json(json: &str) -> PyxResult<PyxEnvelope> {
        Ok(serde_json::from_str(json)?)
    }
}

fn decode_field(value: &str, field: &str) -> PyxResult<Vec<u8>> {
    general_purpose::STANDARD
        .decode(value)
        .map_err(|e| PyxError::MalformedPyx(format!("{}: {}", field, e)))
}

fn decode_id(value: &str, field: &str) -> PyxResult<[u8; 32]> {
    let bytes = decode_field(value, field)?;
    bytes.as_slice().try_into().map_err(|_| {
        PyxError::MalformedPyx(format!("{} must decode to exactly 32 bytes", field))
    })
}

fn decode_residue(value: &str, field: &str) -> PyxResult<BigUint> {
    let bytes = decode_field(value, field)?;
    if bytes.len() > MAX_RESIDUE_BYTES {
        return Err(PyxError::MalformedPyx(format!(
            "{} exceeds {} bytes",
            field, MAX_RESIDUE_BYTES
        )));
    }
    Ok(codec::bytes_to_int(&bytes))
}
