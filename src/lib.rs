//! # rnd
//!
//! Fail-closed bounded random integer generation backed by the operating
//! system's CSPRNG.
//!
//! ## Security Model
//!
//! Randomness comes exclusively from the kernel generator, consumed through
//! `ring::rand::SystemRandom`. There is no userspace fallback: if the OS
//! source cannot be initialized, [`EntropySource::init`] fails and nothing
//! is drawn. Bounded draws use rejection sampling, so every value in range
//! is equally likely even when the bound is not a power of two.
//!
//! ## Usage
//!
//! ```rust
//! use rnd::EntropySource;
//!
//! let source = EntropySource::init().unwrap();
//! let roll = source.roll(6).unwrap();
//! assert!((1..=6).contains(&roll));
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, RndError>`:
//! - [`RndError::InvalidBound`] - malformed upper bound argument
//! - [`RndError::EntropyUnavailable`] - OS entropy source unreachable at init
//! - [`RndError::RandomFailed`] - system RNG failure after init (extremely rare)

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod random;

pub use error::{Result, RndError};
pub use random::EntropySource;

/// Parse an upper bound from a command-line argument.
///
/// Strict decimal parse: non-numeric text, negative values, and values above
/// `u32::MAX` are rejected rather than coerced.
///
/// # Errors
/// Returns `RndError::InvalidBound` if `arg` is not a decimal `u32`.
pub fn parse_upper_bound(arg: &str) -> Result<u32> {
    arg.parse::<u32>()
        .map_err(|_| RndError::InvalidBound(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_plain_decimals() {
        assert_eq!(parse_upper_bound("6").unwrap(), 6);
        assert_eq!(parse_upper_bound("0").unwrap(), 0);
        assert_eq!(parse_upper_bound("4294967295").unwrap(), u32::MAX);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for arg in ["", "abc", "-3", "1.5", "6 ", " 6", "0x10", "99999999999999"] {
            assert!(
                matches!(parse_upper_bound(arg), Err(RndError::InvalidBound(_))),
                "accepted {arg:?}"
            );
        }
    }

    #[test]
    fn test_parse_then_roll() {
        let source = EntropySource::init().unwrap();
        let bound = parse_upper_bound("6").unwrap();
        let roll = source.roll(bound).unwrap();
        assert!((1..=6).contains(&roll));
    }
}
