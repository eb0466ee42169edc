//! Tag text for the word cloud.
//!
//! The word-cloud image itself is drawn by an external renderer; this
//! module produces its input (every tag joined by spaces) together with
//! the word frequencies the cloud is sized by.

use super::{Section, Unavailable};
use crate::filter_pipeline::FilteredView;
use serde::Serialize;
use std::collections::HashMap;

/// How many words the frequency table keeps
pub const MAX_WORDS: usize = 50;

/// Words too common to be worth showing
const STOP_WORDS: &[&str] = &[
    "a", "about", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has",
    "have", "he", "her", "his", "i", "in", "is", "it", "its", "it's", "me", "my", "not", "of",
    "on", "or", "she", "so", "that", "the", "their", "them", "they", "this", "to", "too",
    "very", "was", "we", "were", "with", "you",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Input for the word-cloud renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCloud {
    /// All non-missing tags, space separated, in view order
    pub text: String,
    /// Most frequent words, highest count first
    pub words: Vec<WordCount>,
}

/// Split text into lowercase words.
///
/// A word starts with a letter or digit and may continue with letters,
/// digits or apostrophes; trailing apostrophes are dropped.
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// Join the view's tags and count their words.
pub fn tag_word_frequency(view: &FilteredView<'_>) -> Section<TagCloud> {
    if view.is_empty() {
        return Unavailable::EmptyFilterResult.into();
    }

    let tags: Vec<&str> = view.iter().filter_map(|r| r.tag.as_deref()).collect();
    if tags.is_empty() {
        return Unavailable::NoTagData.into();
    }
    let text = tags.join(" ");

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();
    for word in words(&text) {
        if word.chars().count() < 2 || STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        match positions.get(&word) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                positions.insert(word.clone(), counts.len());
                counts.push(WordCount { word, count: 1 });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(MAX_WORDS);

    Section::Ready(TagCloud { text, words: counts })
}
