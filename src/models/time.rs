use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed-point time in hundredths of a second.
///
/// Identifiers in the transcript carry centiseconds, so keeping that unit all
/// the way through the merge means identifiers and seconds columns always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centiseconds(pub u64);

impl Centiseconds {
    pub const PER_SECOND: u64 = 100;

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / Self::PER_SECOND as f64
    }

    /// Zero-padded integer form used inside segment identifiers.
    pub fn padded(self, width: usize) -> String {
        format!("{:0width$}", self.0, width = width)
    }

    pub fn saturating_sub(self, other: Centiseconds) -> Centiseconds {
        Centiseconds(self.0.saturating_sub(other.0))
    }
}

/// Seconds with exactly two decimals, e.g. `12.05`.
impl fmt::Display for Centiseconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / Self::PER_SECOND,
            self.0 % Self::PER_SECOND
        )
    }
}
