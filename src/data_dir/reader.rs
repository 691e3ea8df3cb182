use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PrepError, PrepResult};
use crate::models::SubUtterance;

const ENABLE_LOGS: bool = true;

/// Read every sub-utterance from a transcript file, in file order.
///
/// The whole file is parsed before anything is merged, so a bad line anywhere
/// aborts the run before any output exists.
pub fn read_sub_utterances(path: &Path) -> PrepResult<Vec<SubUtterance>> {
    let file = File::open(path).map_err(|err| PrepError::io(path, err))?;
    parse_sub_utterances(BufReader::new(file), path)
}

pub(crate) fn parse_sub_utterances<R: BufRead>(
    reader: R,
    path: &Path,
) -> PrepResult<Vec<SubUtterance>> {
    let mut records = Vec::new();
    let mut blank = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| PrepError::io(path, err))?;
        match SubUtterance::from_text_line(index + 1, &line)? {
            Some(record) => records.push(record),
            None => {
                blank += 1;
                crate::log_debug!("{}:{}: skipping blank line", path.display(), index + 1);
            }
        }
    }

    crate::log_info!(
        "Read {} sub-utterances from {}{}",
        records.len(),
        path.display(),
        if blank > 0 {
            format!(" ({blank} blank lines skipped)")
        } else {
            String::new()
        }
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Centiseconds;
    use std::io::Cursor;

    #[test]
    fn test_parse_lines_in_order() {
        let input = "recA-spk1-000100-000300 HELLO\n\nrecA-spk2-000250-000400 WORLD AGAIN\n";
        let records = parse_sub_utterances(Cursor::new(input), Path::new("text")).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[1].line, 3);
        assert_eq!(records[1].start, Centiseconds(250));
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let input = "recA-spk1-000100-000300 ok\nrecA-broken x\n";
        let err = parse_sub_utterances(Cursor::new(input), Path::new("text")).unwrap_err();
        assert!(matches!(err, PrepError::MalformedId { line: 2, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = read_sub_utterances(Path::new("/nonexistent/segprep/text")).unwrap_err();
        assert!(matches!(err, PrepError::Io { .. }));
    }
}
