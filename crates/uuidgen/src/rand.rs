//! Random sources used to mint non-debug identifiers.
//!
//! The service never calls an RNG directly. It asks a [`RandSource<u128>`]
//! for 128 random bits and stamps them into a version 4 UUID, which lets tests
//! plug in a deterministic source.

use ::rand::{Rng, rng};
use uuid::{Builder, Uuid};

/// A trait for random sources that return random integers.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// # Example
/// ```
/// use uuidgen::RandSource;
///
/// struct FixedRand;
/// impl RandSource<u128> for FixedRand {
///     fn rand(&self) -> u128 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 1234);
/// ```
pub trait RandSource<T> {
    /// Returns a random integer.
    fn rand(&self) -> T;
}

/// A `RandSource` backed by the thread-local RNG (`rand::rng()`).
///
/// Each OS thread has its own generator, so concurrent callers never contend
/// with each other. The type stores nothing and is free to share across
/// threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u128> for ThreadRandom {
    fn rand(&self) -> u128 {
        rng().random()
    }
}

/// Builds a version 4 UUID from the next 128 bits of `source`.
///
/// The version and variant bits are overwritten, leaving 122 random bits.
pub(crate) fn random_uuid<R: RandSource<u128> + ?Sized>(source: &R) -> Uuid {
    Builder::from_random_bytes(source.rand().to_be_bytes()).into_uuid()
}
