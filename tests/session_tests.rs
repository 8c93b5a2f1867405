use std::fs;
use std::io::Write;

use tag_extractor::{Error, StopWordSet, TagExtractor};

#[cfg(test)]
mod session_tests {
    use super::*;

    const SAMPLE_TEXT_PATH: &str = "tests/test_files/sample_text_1.txt";
    const STOP_WORDS_PATH: &str = "tests/test_files/stopwords.txt";

    fn fixture_session() -> TagExtractor {
        let stop_words =
            StopWordSet::load(STOP_WORDS_PATH).expect("Failed to load stop-word fixture");
        TagExtractor::new(stop_words)
    }

    #[test]
    fn test_open_file_populates_table() {
        let mut session = fixture_session();
        assert!(!session.is_loaded());

        session
            .open_file(SAMPLE_TEXT_PATH)
            .expect("Failed to open fixture file");

        assert!(session.is_loaded());
        assert_eq!(session.tag_count(), 7);
        assert_eq!(session.table().get("cat"), Some(&3));
    }

    #[test]
    fn test_display_lists_most_frequent_first() {
        let mut session = fixture_session();
        session
            .open_file(SAMPLE_TEXT_PATH)
            .expect("Failed to open fixture file");

        let display = session.display();
        assert!(display.starts_with("cat (3)\n"));
        assert_eq!(display.lines().count(), session.tag_count());
    }

    #[test]
    fn test_reopening_replaces_previous_table() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let second_path = dir.path().join("second.txt");
        let mut second = fs::File::create(&second_path).expect("Failed to create second file");
        writeln!(second, "apple apple banana").expect("Failed to write second file");

        let mut session = fixture_session();
        session
            .open_file(SAMPLE_TEXT_PATH)
            .expect("Failed to open fixture file");
        session
            .open_file(&second_path)
            .expect("Failed to open second file");

        // Nothing from the first file survives the reopen.
        assert_eq!(session.tag_count(), 2);
        assert_eq!(session.table().get("apple"), Some(&2));
        assert_eq!(session.table().get("cat"), None);
    }

    #[test]
    fn test_open_missing_file_keeps_session_usable() {
        let mut session = fixture_session();
        session
            .open_file(SAMPLE_TEXT_PATH)
            .expect("Failed to open fixture file");

        let result = session.open_file("tests/test_files/no_such_input.txt");
        assert!(matches!(result, Err(Error::InputReadError { .. })));

        // The old table was discarded before the failed read; the session
        // is back to idle and can open another file.
        assert!(!session.is_loaded());
        session
            .open_file(SAMPLE_TEXT_PATH)
            .expect("Failed to reopen fixture file");
        assert!(session.is_loaded());
    }

    #[test]
    fn test_mid_read_failure_keeps_partial_counts() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let truncated_path = dir.path().join("truncated.txt");
        let mut bytes = b"apple apple banana\n".to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFE, 0xFD]);
        fs::write(&truncated_path, &bytes).expect("Failed to write input file");

        let mut session = fixture_session();
        let result = session.open_file(&truncated_path);
        assert!(matches!(result, Err(Error::InputReadError { .. })));

        // Counts from the lines read before the failure survive; the caller
        // decides whether partial results are acceptable.
        assert_eq!(session.table().get("apple"), Some(&2));
        assert_eq!(session.table().get("banana"), Some(&1));
        assert_eq!(session.tag_count(), 2);
    }

    #[test]
    fn test_save_tags_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let tags_path = dir.path().join("tags.txt");

        let mut session = fixture_session();
        session
            .open_file(SAMPLE_TEXT_PATH)
            .expect("Failed to open fixture file");
        session
            .save_tags(&tags_path)
            .expect("Failed to save tags");

        let persisted = fs::read_to_string(&tags_path).expect("Failed to read tags file");
        let reparsed: Vec<(String, usize)> = persisted
            .lines()
            .map(|line| {
                let (word, count) = line.split_once(' ').expect("Malformed tag line");
                (word.to_string(), count.parse().expect("Malformed count"))
            })
            .collect();

        assert_eq!(reparsed, session.ranked_tags());
    }

    #[test]
    fn test_save_tags_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let tags_path = dir.path().join("tags.txt");
        fs::write(&tags_path, "stale contents\n").expect("Failed to seed tags file");

        let mut session = fixture_session();
        session
            .open_file(SAMPLE_TEXT_PATH)
            .expect("Failed to open fixture file");
        session
            .save_tags(&tags_path)
            .expect("Failed to save tags");

        let persisted = fs::read_to_string(&tags_path).expect("Failed to read tags file");
        assert!(persisted.starts_with("cat 3\n"));
        assert!(!persisted.contains("stale"));
    }

    #[test]
    fn test_save_tags_to_unwritable_destination() {
        let mut session = fixture_session();
        session
            .open_file(SAMPLE_TEXT_PATH)
            .expect("Failed to open fixture file");

        let result = session.save_tags("tests/no_such_dir/tags.txt");
        assert!(matches!(result, Err(Error::OutputWriteError { .. })));
    }

    #[test]
    fn test_empty_document_yields_empty_display() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let empty_path = dir.path().join("empty.txt");
        fs::write(&empty_path, "").expect("Failed to create empty file");

        let mut session = fixture_session();
        session
            .open_file(&empty_path)
            .expect("Failed to open empty file");

        assert!(!session.is_loaded());
        assert_eq!(session.display(), "");
        assert_eq!(session.ranked_tags(), vec![]);
    }
}
