//! OS-backed secure random number generation.
//!
//! All randomness comes from `ring::rand::SystemRandom`, which reads the
//! operating system's CSPRNG. There is no userspace generator and no
//! fallback source: if the OS generator cannot be reached, initialization
//! fails and nothing is ever drawn.

use ring::rand::{SecureRandom, SystemRandom};

use crate::error::{Result, RndError};

/// Handle to the operating system's secure random generator.
///
/// Drawing is only possible through this type, and the only way to construct
/// it is [`EntropySource::init`], which fails if the OS generator is
/// unreachable. Holding an `EntropySource` is proof that initialization
/// succeeded.
pub struct EntropySource {
    rng: SystemRandom,
}

impl EntropySource {
    /// Initialize the OS entropy source.
    ///
    /// Performs one probe fill so that a missing or broken kernel generator
    /// fails here rather than in a later draw. Not retried in-process.
    ///
    /// # Errors
    /// Returns `RndError::EntropyUnavailable` if the probe fill fails.
    pub fn init() -> Result<Self> {
        let rng = SystemRandom::new();
        let mut probe = [0u8; 16];
        rng.fill(&mut probe)
            .map_err(|_| RndError::EntropyUnavailable)?;
        Ok(Self { rng })
    }

    /// Fill a buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    /// Returns `RndError::RandomFailed` if the system RNG fails.
    pub fn fill(&self, buf: &mut [u8]) -> Result<()> {
        self.rng.fill(buf).map_err(|_| RndError::RandomFailed)
    }

    /// Draw one integer uniformly distributed over `[0, upper_bound)`.
    ///
    /// Uniform for every bound, not just powers of two: 32-bit draws below
    /// `2^32 mod upper_bound` are rejected before the final reduction, so no
    /// residue class is over-represented. An `upper_bound` below 2 leaves 0
    /// as the only candidate and consumes no entropy.
    ///
    /// # Errors
    /// Returns `RndError::RandomFailed` if the system RNG fails.
    pub fn uniform(&self, upper_bound: u32) -> Result<u32> {
        if upper_bound < 2 {
            return Ok(0);
        }
        // 2^32 mod upper_bound: size of the truncated low tail.
        let min = upper_bound.wrapping_neg() % upper_bound;
        loop {
            let r = self.next_u32()?;
            if r >= min {
                return Ok(r % upper_bound);
            }
        }
    }

    /// Draw one integer uniformly distributed over `[1, upper_bound]`.
    ///
    /// Bounds 0 and 1 leave a single candidate, so the result is always 1.
    ///
    /// # Errors
    /// Returns `RndError::RandomFailed` if the system RNG fails.
    pub fn roll(&self, upper_bound: u32) -> Result<u32> {
        Ok(self.uniform(upper_bound)? + 1)
    }

    fn next_u32(&self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }
}
