// src/generators/random.rs
use rand::{CryptoRng, RngCore};

/// Source of uniformly distributed `u32` values suitable for secrets.
///
/// Every `RngCore + CryptoRng` is a `SecureRandom`, so production code hands
/// in `rand::rngs::OsRng` while tests can pass a seeded or scripted source.
pub trait SecureRandom {
    fn next_u32(&mut self) -> u32;
}

impl<R: RngCore + CryptoRng> SecureRandom for R {
    fn next_u32(&mut self) -> u32 {
        RngCore::next_u32(self)
    }
}
