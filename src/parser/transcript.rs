use regex::Regex;

/// Anchor phrases that open each transcript section, matched
/// case-insensitively against the normalized text.
const TRANSFER_ANCHOR: &str = "transfer credits";
const TEST_ANCHOR: &str = "test credits";
const ACADEMIC_ANCHOR: &str = "beginning of academic record";

/// The three disjoint transcript slices. A section whose anchor phrase was
/// not found is the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptSections {
    pub transfer: String,
    pub test: String,
    pub academic: String,
}

/// Collapse raw extracted text into a single-spaced line.
///
/// Newlines and carriage returns become spaces and runs of whitespace
/// collapse to one space, so downstream window math works on a predictable
/// string regardless of how the PDF extractor broke lines.
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Split normalized transcript text into its three sections.
///
/// Each found anchor's section extends from the anchor to the nearest
/// *other* anchor occurring later in the text, or to end-of-text. This
/// yields non-overlapping slices even when the sections appear out of the
/// canonical transfer/test/academic order.
pub fn segment(text: &str) -> TranscriptSections {
    let starts = [
        find_anchor(text, TRANSFER_ANCHOR),
        find_anchor(text, TEST_ANCHOR),
        find_anchor(text, ACADEMIC_ANCHOR),
    ];

    let slice = |idx: usize| -> String {
        let Some(start) = starts[idx] else {
            return String::new();
        };
        let end = starts
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != idx)
            .filter_map(|(_, pos)| *pos)
            .filter(|pos| *pos > start)
            .min()
            .unwrap_or(text.len());
        text.get(start..end).unwrap_or_default().to_string()
    };

    TranscriptSections {
        transfer: slice(0),
        test: slice(1),
        academic: slice(2),
    }
}

/// Byte offset of the first case-insensitive occurrence of an anchor phrase
fn find_anchor(text: &str, anchor: &str) -> Option<usize> {
    let pattern = format!("(?i){}", regex::escape(anchor));
    let re = Regex::new(&pattern).ok()?;
    re.find(text).map(|m| m.start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_all_whitespace() {
        assert_eq!(
            normalize_whitespace("a\r\nb\t c   d\n"),
            "a b c d".to_string()
        );
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("  \n\r  "), "");
    }

    #[test]
    fn test_segment_canonical_order() {
        let text = "Transfer Credits AAA Test Credits BBB Beginning of Academic Record CCC";
        let sections = segment(text);
        assert_eq!(sections.transfer, "Transfer Credits AAA ");
        assert_eq!(sections.test, "Test Credits BBB ");
        assert_eq!(sections.academic, "Beginning of Academic Record CCC");
    }

    #[test]
    fn test_segment_case_insensitive() {
        let text = "TRANSFER CREDITS x test credits y bEgInNiNg Of AcAdEmIc ReCoRd z";
        let sections = segment(text);
        assert!(sections.transfer.contains('x'));
        assert!(sections.test.contains('y'));
        assert!(sections.academic.contains('z'));
    }

    #[test]
    fn test_segment_out_of_order_anchors() {
        let text = "Beginning of Academic Record CCC Transfer Credits AAA Test Credits BBB";
        let sections = segment(text);
        assert_eq!(sections.academic, "Beginning of Academic Record CCC ");
        assert_eq!(sections.transfer, "Transfer Credits AAA ");
        assert_eq!(sections.test, "Test Credits BBB");
    }

    #[test]
    fn test_segment_missing_anchors_are_empty() {
        let sections = segment("Beginning of Academic Record only this");
        assert!(sections.transfer.is_empty());
        assert!(sections.test.is_empty());
        assert_eq!(sections.academic, "Beginning of Academic Record only this");

        let none = segment("nothing recognizable here");
        assert_eq!(none, TranscriptSections::default());
    }

    #[test]
    fn test_segment_sections_do_not_overlap() {
        let text = "Test Credits BBB Transfer Credits AAA";
        let sections = segment(text);
        assert_eq!(sections.test, "Test Credits BBB ");
        assert_eq!(sections.transfer, "Transfer Credits AAA");
        assert!(sections.academic.is_empty());
    }
}
