//! Text statistics engine.
//!
//! [`analyze`] is total: every string, including the empty string or one with
//! no letters at all, produces a complete [`TextStats`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use widgets_model::{Complexity, TextInsights, TextStats};

/// Assumed reading speed for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

const MODERATE_FROM: usize = 15;
const COMPLEX_FROM: usize = 25;

/// One or more sentence terminators count as a single delimiter.
static SENTENCE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence delimiter regex"));

/// A blank line: newline, optional whitespace, newline.
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[\s\x{FEFF}]*\n").expect("Invalid paragraph break regex")
});

/// Byte order mark; whitespace for counting purposes even though it is not
/// Unicode `White_Space`.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Compute the statistics of `text`.
pub fn analyze(text: &str) -> TextStats {
    let characters = text.chars().count();
    let characters_no_spaces = text.chars().filter(|&c| !is_space(c)).count();
    let words = text.split(is_space).filter(|word| !word.is_empty()).count();
    let sentences = count_segments(&SENTENCE_DELIMITER, text);
    let paragraphs = count_segments(&PARAGRAPH_BREAK, text);
    let avg_words_per_sentence = if sentences == 0 {
        0
    } else {
        div_round_half_up(words, sentences)
    };
    let reading_time_minutes = words.div_ceil(WORDS_PER_MINUTE);

    let stats = TextStats {
        characters,
        characters_no_spaces,
        words,
        sentences,
        paragraphs,
        avg_words_per_sentence,
        reading_time_minutes,
    };
    debug!(characters, words, sentences, paragraphs, reading_time_minutes, "analyzed text");
    stats
}

/// Derive the display-only ratios shown next to the statistics.
pub fn insights(stats: &TextStats) -> TextInsights {
    let average_word_length = if stats.words == 0 {
        0
    } else {
        div_round_half_up(stats.characters_no_spaces, stats.words)
    };
    let density_percent = if stats.characters == 0 {
        0
    } else {
        div_round_half_up(stats.characters_no_spaces * 100, stats.characters)
    };
    TextInsights {
        average_word_length,
        density_percent,
        complexity: complexity(stats.avg_words_per_sentence),
    }
}

fn complexity(avg_words_per_sentence: usize) -> Complexity {
    if avg_words_per_sentence < MODERATE_FROM {
        Complexity::Simple
    } else if avg_words_per_sentence < COMPLEX_FROM {
        Complexity::Moderate
    } else {
        Complexity::Complex
    }
}

/// Count the segments between matches of `delimiter` that hold more than
/// whitespace.
fn count_segments(delimiter: &Regex, text: &str) -> usize {
    delimiter
        .split(text)
        .filter(|segment| !segment.trim_matches(is_space).is_empty())
        .count()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// `numerator / denominator` rounded to the nearest integer, halves up.
fn div_round_half_up(numerator: usize, denominator: usize) -> usize {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder * 2 >= denominator {
        quotient + 1
    } else {
        quotient
    }
}
