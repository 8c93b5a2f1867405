use log::error;
use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use tag_extractor::{
    extract_tags_from_text, persist_tags, rank_frequencies, render_display, Error, StopWordSet,
    TagExtractor, DEFAULT_STOP_WORDS_PATH,
};

/// Usage: `tag-extractor-cli [INPUT [OUTPUT]]`.
///
/// Reads the document at INPUT (or stdin when omitted), prints the ranked
/// `word (count)` listing to stdout, and, when OUTPUT is given, persists the
/// `word count` format there. Stop words come from `stopwords.txt` in the
/// working directory; a missing stop-word file is reported and extraction
/// proceeds unfiltered.
fn main() -> ExitCode {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() > 2 {
        error!("usage: tag-extractor-cli [INPUT [OUTPUT]]");
        return ExitCode::FAILURE;
    }

    let ranked = match args.first() {
        Some(input_path) => {
            let mut extractor = TagExtractor::with_default_stop_words();
            if let Err(e) = extractor.open_file(input_path) {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
            extractor.ranked_tags()
        }
        None => {
            // No input path given; read the document from stdin.
            let mut input = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut input) {
                error!("{}", Error::input_read("<stdin>", e));
                return ExitCode::FAILURE;
            }

            let stop_words = StopWordSet::load_or_empty(DEFAULT_STOP_WORDS_PATH);
            rank_frequencies(&extract_tags_from_text(&input, &stop_words))
        }
    };

    print!("{}", render_display(&ranked));

    if let Some(output_path) = args.get(1) {
        if let Err(e) = persist_tags(&ranked, output_path) {
            // Reportable but not a crash; the display output already went
            // to stdout.
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
