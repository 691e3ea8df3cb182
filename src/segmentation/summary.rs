use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, PrepResult};
use crate::models::Centiseconds;
use crate::segmentation::merge::MergeResult;

/// Run statistics, written as JSON when `--summary` is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSummary {
    pub recording_count: usize,
    pub sub_utterance_count: usize,
    pub segment_count: usize,
    pub overlap_count: usize,
    pub total_duration_secs: f64,
    pub recordings: Vec<RecordingSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingSummary {
    pub recording: String,
    pub segment_count: usize,
    pub duration_secs: f64,
}

impl From<&MergeResult> for MergeSummary {
    fn from(result: &MergeResult) -> Self {
        let recordings: Vec<RecordingSummary> = result
            .recordings
            .iter()
            .map(|r| RecordingSummary {
                recording: r.recording.clone(),
                segment_count: r.segments.len(),
                duration_secs: r.total_duration().as_secs_f64(),
            })
            .collect();

        let total = Centiseconds(
            result
                .recordings
                .iter()
                .map(|r| r.total_duration().value())
                .sum(),
        );

        Self {
            recording_count: result.recordings.len(),
            sub_utterance_count: result.sub_utterance_count,
            segment_count: result.segment_count(),
            overlap_count: result.overlap_count,
            total_duration_secs: total.as_secs_f64(),
            recordings,
        }
    }
}

impl MergeSummary {
    pub fn write_json(&self, path: &Path) -> PrepResult<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|err| {
            PrepError::io(path, std::io::Error::new(std::io::ErrorKind::InvalidData, err))
        })?;
        fs::write(path, serialized).map_err(|err| PrepError::io(path, err))
    }
}
