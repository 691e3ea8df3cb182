use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{PrepError, PrepResult};
use crate::models::RecordingSegments;

const ENABLE_LOGS: bool = true;

/// One output row, shared by both tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub segment_id: String,
    pub recording: String,
    pub start: String,
    pub end: String,
}

impl TableRow {
    pub fn utt2spk_line(&self) -> String {
        format!("{} {}", self.segment_id, self.recording)
    }

    pub fn segments_line(&self) -> String {
        format!(
            "{} {} {} {}",
            self.segment_id, self.recording, self.start, self.end
        )
    }
}

/// Rows in recording-then-segment order.
pub fn table_rows(recordings: &[RecordingSegments], id_digits: usize) -> Vec<TableRow> {
    recordings
        .iter()
        .flat_map(|recording| {
            recording.segments.iter().map(move |segment| TableRow {
                segment_id: segment.id(&recording.recording, id_digits),
                recording: recording.recording.clone(),
                start: segment.start.to_string(),
                end: segment.end.to_string(),
            })
        })
        .collect()
}

/// Create (or truncate) both tables and write every segment to each.
pub fn write_tables(
    recordings: &[RecordingSegments],
    id_digits: usize,
    utt2spk_path: &Path,
    segments_path: &Path,
) -> PrepResult<usize> {
    let rows = table_rows(recordings, id_digits);

    let mut utt2spk = create(utt2spk_path)?;
    let mut segments = create(segments_path)?;

    for row in &rows {
        writeln!(utt2spk, "{}", row.utt2spk_line())
            .map_err(|err| PrepError::io(utt2spk_path, err))?;
        writeln!(segments, "{}", row.segments_line())
            .map_err(|err| PrepError::io(segments_path, err))?;
    }

    utt2spk
        .flush()
        .map_err(|err| PrepError::io(utt2spk_path, err))?;
    segments
        .flush()
        .map_err(|err| PrepError::io(segments_path, err))?;

    crate::log_info!(
        "Wrote {} rows to {} and {}",
        rows.len(),
        utt2spk_path.display(),
        segments_path.display()
    );

    Ok(rows.len())
}

fn create(path: &Path) -> PrepResult<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|err| PrepError::io(path, err))
}
