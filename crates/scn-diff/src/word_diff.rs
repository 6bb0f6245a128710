//! Word-level diff for a pair of modified lines.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lcs::{align_eq, Edit};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordKind {
    Unchanged,
    Added,
    Removed,
}

/// One token of a word diff. Whitespace runs are tokens too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiff {
    #[serde(rename = "type")]
    pub kind: WordKind,
    pub word: String,
}

impl WordDiff {
    fn new(kind: WordKind, word: &str) -> Self {
        Self {
            kind,
            word: word.to_string(),
        }
    }
}

/// Split text into alternating word and whitespace-run tokens.
///
/// The sequence always starts and ends with a word token, which is empty
/// when the text starts or ends with whitespace: `" a"` becomes
/// `["", " ", "a"]` and `""` becomes `[""]`. Concatenating the tokens gives
/// back the input.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for run in WHITESPACE_RUN.find_iter(text) {
        tokens.push(&text[last..run.start()]);
        tokens.push(run.as_str());
        last = run.end();
    }
    tokens.push(&text[last..]);
    tokens
}

/// Align the tokens of two line versions by exact equality.
pub fn compute_word_diff(old: &str, new: &str) -> Vec<WordDiff> {
    let old_tokens = tokenize(old);
    let new_tokens = tokenize(new);

    align_eq(&old_tokens, &new_tokens)
        .into_iter()
        .map(|edit| match edit {
            Edit::Unchanged { old_index, .. } => {
                WordDiff::new(WordKind::Unchanged, old_tokens[old_index])
            }
            Edit::Added { new_index } => WordDiff::new(WordKind::Added, new_tokens[new_index]),
            Edit::Removed { old_index } => WordDiff::new(WordKind::Removed, old_tokens[old_index]),
        })
        .collect()
}
