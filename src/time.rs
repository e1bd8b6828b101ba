/*!
# Timestamp Rescaling

Raw timestamps are arbitrary non-negative integers (epoch seconds, snapshot indices, ...).
The interchange format requires them rescaled to `[0, 1]` relative to the minimum and
maximum observed over the *entire* corpus of one invocation.

[`TimeScale`] captures the corpus-wide range once and rejects a zero-width range up front:
rescaling with `min == max` would divide by zero, so constructing the scale fails with
[`PrepError::DegenerateRange`](crate::error::PrepError::DegenerateRange) instead.
*/

use crate::error::{PrepError, Result};

/// Number of decimal digits timestamps are rounded to before rendering
const ROUND_DIGITS_FACTOR: f64 = 1e10;

/// Rounds a normalized timestamp to 10 decimal digits
pub fn round10(t: f64) -> f64 {
    (t * ROUND_DIGITS_FACTOR).round() / ROUND_DIGITS_FACTOR
}

/// The observed raw timestamp range of a corpus, used to rescale into `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeScale {
    min: u64,
    width: u64,
}

impl TimeScale {
    /// Creates a scale from the corpus-wide minimum and maximum raw timestamp.
    ///
    /// # Errors
    /// Fails with [`PrepError::DegenerateRange`] if `min == max` as the rescaling
    /// would be a division by zero.
    pub fn try_new(min: u64, max: u64) -> Result<Self> {
        debug_assert!(min <= max);
        if min == max {
            return Err(PrepError::DegenerateRange { value: min });
        }

        Ok(Self {
            min,
            width: max - min,
        })
    }

    /// Smallest raw timestamp of the corpus
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Largest raw timestamp of the corpus
    pub fn max(&self) -> u64 {
        self.min + self.width
    }

    /// Width of the raw range
    pub fn width(&self) -> u64 {
        self.width
    }

    /// Maps a raw timestamp of the corpus into `[0, 1]`.
    ///
    /// The corpus minimum maps to `0.0`, the maximum to `1.0`.
    pub fn rescale(&self, raw: u64) -> f64 {
        debug_assert!((self.min..=self.max()).contains(&raw));
        (raw - self.min) as f64 / self.width as f64
    }
}
