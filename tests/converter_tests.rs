//! End-to-end properties of the corpus converter.

mod common;

use common::{init_logger, sample_corpus, BASMALA, HEADING};
use warsh_transform::output::render_json;
use warsh_transform::{convert, ConvertError, ErrorType, Verse};

#[cfg(test)]
mod structure_tests {
    use super::*;

    #[test]
    fn test_minimal_chapter_with_opening_phrase() {
        init_logger();
        let source = format!("{HEADING} الفاتحة\n{BASMALA}\nأول ١ ثان ٢");
        let doc = convert(&source).unwrap();

        assert_eq!(
            doc.chapter(1).unwrap(),
            &[
                Verse::new(1, 0, BASMALA),
                Verse::new(1, 1, "أول"),
                Verse::new(1, 2, "ثان"),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_document() {
        let doc = convert("").unwrap();
        assert!(doc.is_empty());
        assert_eq!(render_json(&doc).unwrap(), "{}");
    }

    #[test]
    fn test_chapter_keys_follow_heading_count() {
        let doc = convert(&sample_corpus()).unwrap();
        let keys: Vec<u32> = doc.chapters().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![1, 2]);
    }

    #[test]
    fn test_verses_reflow_across_line_breaks() {
        let doc = convert(&sample_corpus()).unwrap();
        let fatiha = doc.chapter(1).unwrap();
        assert_eq!(fatiha[0].verse, 0);
        assert_eq!(fatiha[2].text, "اَ۬لرَّحْمَٰنِ اِ۬لرَّحِيمِ");
    }

    #[test]
    fn test_numbering_is_consecutive_and_independent_of_opening_phrase() {
        let doc = convert(&sample_corpus()).unwrap();
        for (chapter, verses) in doc.chapters() {
            let numbered: Vec<u32> = verses.iter().filter(|v| v.verse > 0).map(|v| v.verse).collect();
            let expected: Vec<u32> = (1..=numbered.len() as u32).collect();
            assert_eq!(numbered, expected, "chapter {chapter}");
            assert!(verses.iter().all(|v| v.chapter == chapter));
        }
        assert!(doc.chapter(2).unwrap().iter().all(|v| v.verse != 0));
    }

    #[test]
    fn test_blank_chapter_is_skipped_but_keeps_its_index() {
        let source = format!("{HEADING}\n   \n{HEADING} الثالث\nنص ١");
        let doc = convert(&source).unwrap();
        assert!(doc.chapter(1).is_none());
        assert_eq!(doc.chapter(2).unwrap(), &[Verse::new(2, 1, "نص")]);
        assert_eq!(doc.chapter_count(), 1);
    }

    #[test]
    fn test_cr_only_corpus_matches_lf_corpus() {
        let lf = convert(&sample_corpus()).unwrap();
        let cr = convert(&sample_corpus().replace('\n', "\r")).unwrap();
        assert_eq!(cr, lf);
        assert_eq!(cr.chapter(1).unwrap()[0].text, BASMALA);
    }

    #[test]
    fn test_multi_digit_markers() {
        let body: String = (1..=12)
            .map(|n| {
                let eastern: String = n
                    .to_string()
                    .chars()
                    .map(|c| char::from_u32(0x0660 + c.to_digit(10).unwrap()).unwrap())
                    .collect();
                format!("آية {eastern} ")
            })
            .collect();
        let doc = convert(&format!("{HEADING} x\n{body}")).unwrap();
        let verses = doc.chapter(1).unwrap();
        assert_eq!(verses.len(), 12);
        assert_eq!(verses[11].verse, 12);
        assert_eq!(verses[11].text, "آية");
    }
}

#[cfg(test)]
mod sequence_tests {
    use super::*;

    #[test]
    fn test_gap_reports_expected_and_found() {
        let source = format!("{HEADING} x\nأ ١ ب ٢ ج ٤");
        let err = convert(&source).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Sequence);
        match err {
            ConvertError::SequenceMismatch {
                chapter,
                expected,
                found,
                ..
            } => {
                assert_eq!((chapter, expected, found.as_str()), (1, 3, "4"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_mismatch_in_later_chapter_aborts_everything() {
        let source = format!("{HEADING} a\nنص ١\n{HEADING} b\nنص ٢");
        let err = convert(&source).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Mismatch in chapter 2: Expected verse 1, found 2"
        );
    }

    #[test]
    fn test_duplicate_marker_is_rejected() {
        let source = format!("{HEADING} a\nنص ١ نص ١");
        assert!(convert(&source).is_err());
    }

    #[test]
    fn test_zero_marker_is_rejected() {
        let source = format!("{HEADING} a\nنص ٠");
        let err = convert(&source).unwrap_err();
        assert!(err.to_string().contains("found 0"));
    }
}

#[cfg(test)]
mod determinism_tests {
    use super::*;

    #[test]
    fn test_rendering_is_deterministic() {
        let first = render_json(&convert(&sample_corpus()).unwrap()).unwrap();
        let second = render_json(&convert(&sample_corpus()).unwrap()).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("الٓمٓ"), "Arabic must not be escaped");
        assert!(!first.contains("normalized"));
    }
}
