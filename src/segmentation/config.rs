use serde::{Deserialize, Serialize};

/// Tunables for merging sub-utterances into segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeConfig {
    /// Group by recording and sort by start time before merging instead of
    /// requiring the transcript to be pre-grouped and pre-sorted.
    pub sort_input: bool,

    /// Zero-pad width of the time fields in segment identifiers.
    pub id_digits: usize,
}

impl MergeConfig {
    pub const DEFAULT_ID_DIGITS: usize = 7;
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            sort_input: false,
            id_digits: Self::DEFAULT_ID_DIGITS,
        }
    }
}
