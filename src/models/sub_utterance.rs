use crate::error::{PrepError, PrepResult};
use crate::models::Centiseconds;

/// One transcript line's identifier, `<recording>-<tag>...-<start>-<end>`.
///
/// Only the recording prefix and the last two fields matter; anything in
/// between (speaker, session, device) is carried in `id` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubUtterance {
    pub id: String,
    pub recording: String,
    pub start: Centiseconds,
    pub end: Centiseconds,
    /// 1-based line number in the source file, for diagnostics.
    pub line: usize,
}

impl SubUtterance {
    /// Parse a transcript line. Blank lines yield `Ok(None)`; trailing words
    /// after the identifier are ignored.
    pub fn from_text_line(line: usize, text: &str) -> PrepResult<Option<Self>> {
        match text.split_whitespace().next() {
            Some(id) => Self::parse_id(line, id).map(Some),
            None => Ok(None),
        }
    }

    /// Parse a bare identifier and check `start < end`.
    pub fn parse_id(line: usize, id: &str) -> PrepResult<Self> {
        let malformed = |reason: &str| PrepError::MalformedId {
            line,
            id: id.to_string(),
            reason: reason.to_string(),
        };

        let mut fields = id.rsplit('-');
        let end_field = fields.next().ok_or_else(|| malformed("missing end time"))?;
        let start_field = fields
            .next()
            .ok_or_else(|| malformed("missing start time"))?;
        if fields.next().is_none() {
            return Err(malformed("expected <recording>-...-<start>-<end>"));
        }

        // `split` always yields a first item
        let recording = id.split('-').next().unwrap_or_default();
        if recording.is_empty() {
            return Err(malformed("empty recording prefix"));
        }

        let start = parse_centiseconds(start_field)
            .ok_or_else(|| malformed(&format!("start field '{start_field}' is not a number")))?;
        let end = parse_centiseconds(end_field)
            .ok_or_else(|| malformed(&format!("end field '{end_field}' is not a number")))?;

        if start >= end {
            return Err(PrepError::InvalidInterval {
                line,
                id: id.to_string(),
                start,
                end,
            });
        }

        Ok(Self {
            id: id.to_string(),
            recording: recording.to_string(),
            start,
            end,
            line,
        })
    }
}

fn parse_centiseconds(field: &str) -> Option<Centiseconds> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u64>().ok().map(Centiseconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chime_style_id() {
        let sub = SubUtterance::parse_id(3, "S02_U01-P05-0001234-0001567").unwrap();
        assert_eq!(sub.recording, "S02_U01");
        assert_eq!(sub.start, Centiseconds(1234));
        assert_eq!(sub.end, Centiseconds(1567));
        assert_eq!(sub.line, 3);
    }

    #[test]
    fn test_middle_fields_are_ignored() {
        let sub = SubUtterance::parse_id(1, "recA-spk1-extra-tag-000100-000300").unwrap();
        assert_eq!(sub.recording, "recA");
        assert_eq!(sub.start, Centiseconds(100));
        assert_eq!(sub.end, Centiseconds(300));

        // Only three fields: the recording doubles as the tag
        let sub = SubUtterance::parse_id(1, "recA-100-300").unwrap();
        assert_eq!(sub.recording, "recA");
    }

    #[test]
    fn test_text_line_ignores_transcript_words() {
        let sub = SubUtterance::from_text_line(1, "recA-spk1-000100-000300 hello there  world\n")
            .unwrap()
            .unwrap();
        assert_eq!(sub.id, "recA-spk1-000100-000300");

        assert!(SubUtterance::from_text_line(2, "   \t").unwrap().is_none());
        assert!(SubUtterance::from_text_line(3, "").unwrap().is_none());
    }

    #[test]
    fn test_too_few_fields() {
        let err = SubUtterance::parse_id(7, "recA-000100").unwrap_err();
        assert!(matches!(err, PrepError::MalformedId { line: 7, .. }));

        let err = SubUtterance::parse_id(7, "recA").unwrap_err();
        assert!(matches!(err, PrepError::MalformedId { .. }));
    }

    #[test]
    fn test_non_numeric_times() {
        for id in ["recA-spk1-00x100-000300", "recA-spk1-000100-", "recA-spk1-+100-000300"] {
            let err = SubUtterance::parse_id(1, id).unwrap_err();
            assert!(matches!(err, PrepError::MalformedId { .. }), "{id}");
        }
    }

    #[test]
    fn test_empty_recording_prefix() {
        let err = SubUtterance::parse_id(1, "-spk1-000100-000300").unwrap_err();
        assert!(matches!(err, PrepError::MalformedId { .. }));
    }

    #[test]
    fn test_start_not_before_end() {
        let err = SubUtterance::parse_id(4, "recA-spk1-000500-000400").unwrap_err();
        match err {
            PrepError::InvalidInterval { line, start, end, .. } => {
                assert_eq!(line, 4);
                assert_eq!(start, Centiseconds(500));
                assert_eq!(end, Centiseconds(400));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = SubUtterance::parse_id(4, "recA-spk1-000500-000500").unwrap_err();
        assert!(matches!(err, PrepError::InvalidInterval { .. }));
    }
}
