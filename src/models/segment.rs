use serde::{Deserialize, Serialize};

use crate::models::Centiseconds;

/// A merged, non-overlapping interval within one recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start: Centiseconds,
    pub end: Centiseconds,
}

impl Segment {
    pub fn new(start: Centiseconds, end: Centiseconds) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Centiseconds {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, start: Centiseconds, end: Centiseconds) -> bool {
        self.start <= start && end <= self.end
    }

    /// `<recording>-<start>-<end>` with both times zero-padded to `digits`.
    pub fn id(&self, recording: &str, digits: usize) -> String {
        format!(
            "{}-{}-{}",
            recording,
            self.start.padded(digits),
            self.end.padded(digits)
        )
    }
}

/// All merged segments of one recording, in start-time order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingSegments {
    pub recording: String,
    pub segments: Vec<Segment>,
}

impl RecordingSegments {
    pub fn new(recording: impl Into<String>) -> Self {
        Self {
            recording: recording.into(),
            segments: Vec::new(),
        }
    }

    pub fn total_duration(&self) -> Centiseconds {
        Centiseconds(self.segments.iter().map(|s| s.duration().value()).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_id_format() {
        let segment = Segment::new(Centiseconds(100), Centiseconds(400));
        assert_eq!(segment.id("recA", 7), "recA-0000100-0000400");
        assert_eq!(segment.id("S02_U01", 5), "S02_U01-00100-00400");
    }

    #[test]
    fn test_segment_contains() {
        let segment = Segment::new(Centiseconds(100), Centiseconds(400));
        assert!(segment.contains(Centiseconds(100), Centiseconds(400)));
        assert!(segment.contains(Centiseconds(250), Centiseconds(300)));
        assert!(!segment.contains(Centiseconds(50), Centiseconds(300)));
        assert!(!segment.contains(Centiseconds(250), Centiseconds(401)));
    }

    #[test]
    fn test_total_duration() {
        let mut recording = RecordingSegments::new("recA");
        recording.segments.push(Segment::new(Centiseconds(100), Centiseconds(400)));
        recording.segments.push(Segment::new(Centiseconds(500), Centiseconds(600)));
        assert_eq!(recording.total_duration(), Centiseconds(400));
    }
}
