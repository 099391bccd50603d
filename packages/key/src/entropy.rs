//! Cryptographically secure random material
//!
//! Backed by `rand::rng()`, a thread-local CSPRNG seeded from the OS. Each
//! thread owns its generator, so concurrent callers need no locking.

use rand::RngCore;

/// Fill a fixed-size array with random bytes
#[must_use]
pub fn random_array<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}
