use crate::error::{PyxError, PyxResult};
use num_bigint::BigUint;

// Interpret bytes as a big-endian unsigned integer
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

// Minimum-length big-endian encoding, no leading zero bytes
pub fn int_to_bytes(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// Big-endian encoding left-padded with zeros to exactly `width` bytes.
/// Fails if the value does not fit.
pub fn int_to_fixed_bytes(value: &BigUint, width: usize) -> PyxResult<Vec<u8>> {
    let bytes = value.to_bytes_be();
    if bytes.len() > width {
        return Err(PyxError::InvalidArgument(format!(
            "value needs {} bytes, field is {}",
            bytes.len(),
            width
        )));
    }
    let mut out = vec![0u8; width - bytes.len()];
    out.extend_from_slice(&bytes);
    Ok(out)
}

pub fn u64_be(n: u64) -> [u8; 8] {
    n.to_be_bytes()
}

pub fn u32_be(n: u32) -> [u8; 4] {
    n.to_be_bytes()
}
