//! Plain-text statistics types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts derived from a block of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStats {
    /// Every character, whitespace included.
    pub characters: usize,
    /// Characters that are not whitespace.
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// `words / sentences`, rounded half-up; 0 without sentences.
    pub avg_words_per_sentence: usize,
    /// Minutes at 200 words per minute, rounded up.
    pub reading_time_minutes: usize,
}

/// One labelled statistic as shown on a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub label: &'static str,
    pub description: &'static str,
    pub value: usize,
}

impl TextStats {
    /// The card-level statistics in display order.
    ///
    /// Reading time is not a card; it is shown as a badge next to the input.
    pub fn entries(&self) -> [StatEntry; 6] {
        [
            StatEntry {
                label: "Characters",
                description: "Including spaces",
                value: self.characters,
            },
            StatEntry {
                label: "Characters (no spaces)",
                description: "Excluding spaces",
                value: self.characters_no_spaces,
            },
            StatEntry {
                label: "Words",
                description: "Total word count",
                value: self.words,
            },
            StatEntry {
                label: "Sentences",
                description: "Complete sentences",
                value: self.sentences,
            },
            StatEntry {
                label: "Paragraphs",
                description: "Text paragraphs",
                value: self.paragraphs,
            },
            StatEntry {
                label: "Avg Words/Sentence",
                description: "Average sentence length",
                value: self.avg_words_per_sentence,
            },
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.characters == 0
    }
}

/// Readability bucket based on average sentence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Moderate => "Moderate",
            Complexity::Complex => "Complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display-only ratios derived from [`TextStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextInsights {
    /// Non-whitespace characters per word, rounded half-up.
    pub average_word_length: usize,
    /// Share of non-whitespace characters, in percent.
    pub density_percent: usize,
    pub complexity: Complexity,
}
