//! Wesolowski verifiable delay function over the RSA-2048 group.
//!
//! A minter performs T sequential modular squarings, the inherently
//! non-parallelizable delay, and emits a Pyx: a compact artifact binding
//! the minter identity, a challenge, the iteration count, the VDF output
//! y = x^(2^T) mod N, and a proof pi = x^floor(2^T / L) mod N that any
//! verifier checks in time independent of T via
//! pi^L * x^(2^T mod L) = y (mod N).
//!
//! Proof generation is steady-state: one extra pass of T iterations with
//! O(1) working memory, streaming the quotient bits of 2^T / L MSB-first
//! out of a long division instead of ever materializing 2^T.
//!
//! The modulus is the RSA-2048 challenge number, whose factorization is
//! unknown; there is no trusted setup.

pub mod arith;
pub mod codec;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod eval;
pub mod hashing;
pub mod minter;
pub mod prime;
pub mod progress;
pub mod proof;
pub mod pyx;
pub mod verifier;

pub use envelope::PyxEnvelope;
pub use error::{PyxError, PyxResult};
pub use minter::{mint, mint_with, MintOptions};
pub use progress::CancelToken;
pub use pyx::Pyx;
pub use verifier::{verify, Verification, VerifyFailure};

// ===================================================================
//                       END-TO-END TEST SUITE
// ===================================================================
// The long mint below reproduces the protocol's authoritative vector;
// the module-level suites cover each component in isolation.
