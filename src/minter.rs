use crate::constants::ID_LEN;
use crate::error::{PyxError, PyxResult};
use crate::progress::{CancelToken, Monitor};
use crate::pyx::Pyx;
use crate::{eval, hashing, prime, proof};
use log::debug;

/// Knobs for an in-flight mint: an optional percent sink and an optional
/// cancellation token, both observed at bounded intervals. The progress
/// callback cannot alter control flow; only the token stops a mint.
#[derive(Default)]
pub struct MintOptions<'a> {
    pub progress: Option<&'a mut dyn FnMut(u8)>,
    pub cancel: Option<&'a CancelToken>,
}

/// Mint a Pyx: derive the base, perform T sequential squarings, derive the
/// challenge prime from the output, and stream out the Wesolowski proof.
pub fn mint(minter_id: &[u8], challenge: &[u8], iterations: u64) -> PyxResult<Pyx> {
    mint_with(minter_id, challenge, iterations, MintOptions::default())
}

/// `mint` with progress reporting and cancellation. Evaluation spans
/// 0-50 percent, proving 50-100; on cancellation all derived state is
/// discarded and no partial artifact is emitted. A panicking progress
/// callback is treated as a cancellation request.
pub fn mint_with(
    minter_id: &[u8],
    challenge: &[u8],
    iterations: u64,
    options: MintOptions,
) -> PyxResult<Pyx> {
    let minter_id = to_id(minter_id, "minterId")?;
    let challenge = to_id(challenge, "challenge")?;
    if iterations < 1 {
        return Err(PyxError::InvalidArgument(
            "iterations must be at least 1".to_string(),
        ));
    }

    let mut monitor = Monitor::new(options.progress, options.cancel);

    debug!("minting with {} iterations", iterations);
    let x = hashing::derive_base(&minter_id, &challenge, iterations);

    monitor.begin_phase(0, 50)?;
    let y = eval::evaluate(&x, iterations, &mut monitor)?;

    let l = prime::derive_challenge_prime(&y);
    debug!("challenge prime has {} bits", l.bits());

    monitor.begin_phase(50, 100)?;
    let pi = proof::prove(&x, iterations, &l, &mut monitor)?;

    let pyx = Pyx::new(minter_id, challenge, iterations, y, pi)?;
    monitor.finish()?;
    debug!("minted pyx {}", pyx.pyx_id_hex());
    Ok(pyx)
}

fn to_id(bytes: &[u8], field: &str) -> PyxResult<[u8; ID_LEN]> {
    bytes.try_into().map_err(|_| {
        PyxError::InvalidArgument(format!(
            "{} must be {} bytes, got {}",
            field,
            ID_LEN,
            bytes.len()
        ))
    })
}
