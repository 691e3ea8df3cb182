use std::collections::HashSet;

use crate::error::{PrepError, PrepResult};
use crate::models::{Centiseconds, RecordingSegments, Segment, SubUtterance};
use crate::segmentation::config::MergeConfig;
use crate::segmentation::grouping::group_and_sort;

const ENABLE_LOGS: bool = true;

/// Result of merging: segments per recording plus counters for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResult {
    /// Recordings in order of first appearance.
    pub recordings: Vec<RecordingSegments>,
    pub sub_utterance_count: usize,
    /// Sub-utterances that were folded into an already pending interval.
    pub overlap_count: usize,
}

impl MergeResult {
    pub fn segment_count(&self) -> usize {
        self.recordings.iter().map(|r| r.segments.len()).sum()
    }
}

/// The recording currently being accumulated.
struct ActiveRecording {
    segments: RecordingSegments,
    /// Interval not yet finalized; `None` until the first record arrives.
    pending: Option<Segment>,
    last_start: Centiseconds,
}

impl ActiveRecording {
    fn new(recording: &str) -> Self {
        Self {
            segments: RecordingSegments::new(recording),
            pending: None,
            last_start: Centiseconds::default(),
        }
    }

    fn finalize(mut self) -> RecordingSegments {
        if let Some(pending) = self.pending.take() {
            self.segments.segments.push(pending);
        }
        self.segments
    }
}

/// Walks sub-utterances in arrival order and coalesces overlapping intervals.
///
/// Records must arrive grouped by recording and sorted by start time within
/// each recording. Both are checked: a recording that reappears, or a start
/// earlier than its predecessor's, is an error rather than silently producing
/// overlapping output.
#[derive(Default)]
pub struct SegmentAccumulator {
    finished: Vec<RecordingSegments>,
    seen: HashSet<String>,
    active: Option<ActiveRecording>,
    sub_utterance_count: usize,
    overlap_count: usize,
}

impl SegmentAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &SubUtterance) -> PrepResult<()> {
        let mut active = match self.active.take() {
            Some(active) if active.segments.recording == record.recording => active,
            previous => {
                if self.seen.contains(&record.recording) {
                    return Err(PrepError::RecordingNotContiguous {
                        line: record.line,
                        recording: record.recording.clone(),
                    });
                }
                if let Some(previous) = previous {
                    self.finish_recording(previous);
                }
                self.seen.insert(record.recording.clone());
                ActiveRecording::new(&record.recording)
            }
        };

        if record.start < active.last_start {
            return Err(PrepError::StartOutOfOrder {
                line: record.line,
                id: record.id.clone(),
                start: record.start,
                previous: active.last_start,
            });
        }
        active.last_start = record.start;
        self.sub_utterance_count += 1;

        match active.pending.as_mut() {
            None => active.pending = Some(Segment::new(record.start, record.end)),
            Some(pending) if record.start > pending.end => {
                active.segments.segments.push(*pending);
                *pending = Segment::new(record.start, record.end);
            }
            Some(pending) => {
                pending.end = pending.end.max(record.end);
                self.overlap_count += 1;
            }
        }

        self.active = Some(active);
        Ok(())
    }

    fn finish_recording(&mut self, active: ActiveRecording) {
        let recording = active.finalize();
        crate::log_debug!(
            "recording {}: {} segment(s), {} of speech",
            recording.recording,
            recording.segments.len(),
            recording.total_duration()
        );
        self.finished.push(recording);
    }

    pub fn finish(mut self) -> MergeResult {
        if let Some(active) = self.active.take() {
            self.finish_recording(active);
        }
        MergeResult {
            recordings: self.finished,
            sub_utterance_count: self.sub_utterance_count,
            overlap_count: self.overlap_count,
        }
    }
}

/// Merge sub-utterances into non-overlapping segments per recording.
pub fn merge_sub_utterances(
    records: Vec<SubUtterance>,
    config: &MergeConfig,
) -> PrepResult<MergeResult> {
    let records = if config.sort_input {
        group_and_sort(records)
    } else {
        records
    };

    let mut accumulator = SegmentAccumulator::new();
    for record in &records {
        accumulator.push(record)?;
    }
    let result = accumulator.finish();

    crate::log_info!(
        "Merged {} sub-utterances into {} segments across {} recordings",
        result.sub_utterance_count,
        result.segment_count(),
        result.recordings.len()
    );

    Ok(result)
}
