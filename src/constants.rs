// Protocol version byte, first byte of the canonical serialization
pub const VERSION: u8 = 0x01;

/// RSA-2048 modulus from the RSA Factoring Challenge
/// This modulus has unknown factorization, making it suitable for VDF
pub const RSA_2048_MODULUS: &str = "C7970CEEDCC3B0754490201A7AA613CD73911081C790F5F1A8726F463550BB5B7FF0DB8E1EA1189EC72F93D1650011BD721AEEACC2ACDE32A04107F0648C2813A31F5B0B7765FF8B44B4B6FFC93384B646EB09C7CF5E8592D40EA33C80039F35B4F14A04B51F7BFD781BE4D1673164BA8EB991C2C4D730BBBE35F592BDEF524AF7E8DAEFD26C66FC02C479AF89D64D373F442709439DE66CEB955F3EA37D5159F6135809F85334B5CB1813ADDC80CD05609F10AC6A95AD65872C909525BDAD32BC729592642920F24C61DC5B3C3B7923E56B16A4D9D373D8721F24A3FC0F1B3131F55615172866BCCC30F95054C824E733A5EB6817F7BC16399D48C6361CC7E5";

// Width of the minterId and challenge fields (bytes)
pub const ID_LEN: usize = 32;

// Width of a serialized group residue (2048 bits)
pub const RESIDUE_LEN: usize = 256;

// Canonical layout: version + minterId + challenge + u64 iterations + y + proof
pub const SERIALIZED_LEN: usize = 1 + ID_LEN + ID_LEN + 8 + RESIDUE_LEN + RESIDUE_LEN;

// Squarings between progress and cancellation checks
pub const PROGRESS_CHUNK: u64 = 1_000;

// Iterations between cooperative yields to the host scheduler
pub const YIELD_INTERVAL: u64 = 50_000;

// Miller-Rabin rounds for the prime search
pub const MILLER_RABIN_ROUNDS: u32 = 40;

// Trial division table applied before each Miller-Rabin run
pub const SMALL_PRIMES: [u32; 15] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];
