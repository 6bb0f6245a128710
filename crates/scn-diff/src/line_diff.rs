//! Line-level diff within a matched scene, with word-level detail for
//! modified lines.
//!
//! Lines are aligned by exact text with the LCS aligner. A single
//! left-to-right pass then folds every removal that is immediately followed
//! by an addition into one `Modified` entry carrying a word diff.

use scn_types::Line;
use serde::{Deserialize, Serialize};

use crate::lcs::{align, Edit};
use crate::word_diff::{compute_word_diff, WordDiff};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Unchanged,
    Added,
    Removed,
    Modified,
}

/// A single entry of a line diff. Line numbers are 1-based document lines
/// of the respective revision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LineDiff {
    /// A line present in both versions.
    #[serde(rename_all = "camelCase")]
    Unchanged {
        content: String,
        old_line: usize,
        new_line: usize,
    },
    /// A line only in the new version.
    #[serde(rename_all = "camelCase")]
    Added { content: String, new_line: usize },
    /// A line only in the old version.
    #[serde(rename_all = "camelCase")]
    Removed { content: String, old_line: usize },
    /// A removed line directly followed by an added one.
    #[serde(rename_all = "camelCase")]
    Modified {
        old_content: String,
        new_content: String,
        old_line: usize,
        new_line: usize,
        word_diff: Vec<WordDiff>,
    },
}

impl LineDiff {
    pub fn kind(&self) -> LineKind {
        match self {
            LineDiff::Unchanged { .. } => LineKind::Unchanged,
            LineDiff::Added { .. } => LineKind::Added,
            LineDiff::Removed { .. } => LineKind::Removed,
            LineDiff::Modified { .. } => LineKind::Modified,
        }
    }

    pub fn old_line(&self) -> Option<usize> {
        match *self {
            LineDiff::Unchanged { old_line, .. }
            | LineDiff::Removed { old_line, .. }
            | LineDiff::Modified { old_line, .. } => Some(old_line),
            LineDiff::Added { .. } => None,
        }
    }

    pub fn new_line(&self) -> Option<usize> {
        match *self {
            LineDiff::Unchanged { new_line, .. }
            | LineDiff::Added { new_line, .. }
            | LineDiff::Modified { new_line, .. } => Some(new_line),
            LineDiff::Removed { .. } => None,
        }
    }

    /// Text of the line as it reads in the old version.
    pub fn old_text(&self) -> Option<&str> {
        match self {
            LineDiff::Unchanged { content, .. } | LineDiff::Removed { content, .. } => {
                Some(content)
            }
            LineDiff::Modified { old_content, .. } => Some(old_content),
            LineDiff::Added { .. } => None,
        }
    }

    /// Text of the line as it reads in the new version.
    pub fn new_text(&self) -> Option<&str> {
        match self {
            LineDiff::Unchanged { content, .. } | LineDiff::Added { content, .. } => {
                Some(content)
            }
            LineDiff::Modified { new_content, .. } => Some(new_content),
            LineDiff::Removed { .. } => None,
        }
    }

    /// Word-level detail, only for modified lines.
    pub fn word_diff(&self) -> Option<&[WordDiff]> {
        match self {
            LineDiff::Modified { word_diff, .. } => Some(word_diff),
            _ => None,
        }
    }
}

/// Diff two scene bodies line by line, enriching modified lines with a
/// word diff.
///
/// Pairing of removals and additions is greedy: in a run of several removed
/// lines followed by several added lines, only the last removal and the
/// first addition become a `Modified` entry. Lines are not matched by
/// similarity.
pub fn compute_line_diff_with_words(old: &[Line], new: &[Line]) -> Vec<LineDiff> {
    let raw = align(old, new, |a, b| a.text == b.text)
        .into_iter()
        .map(|edit| match edit {
            Edit::Unchanged {
                old_index,
                new_index,
            } => LineDiff::Unchanged {
                content: old[old_index].text.clone(),
                old_line: old[old_index].line_num,
                new_line: new[new_index].line_num,
            },
            Edit::Added { new_index } => LineDiff::Added {
                content: new[new_index].text.clone(),
                new_line: new[new_index].line_num,
            },
            Edit::Removed { old_index } => LineDiff::Removed {
                content: old[old_index].text.clone(),
                old_line: old[old_index].line_num,
            },
        })
        .collect();

    pair_modifications(raw)
}

fn pair_modifications(diffs: Vec<LineDiff>) -> Vec<LineDiff> {
    let mut paired = Vec::with_capacity(diffs.len());
    let mut iter = diffs.into_iter().peekable();

    while let Some(current) = iter.next() {
        if let LineDiff::Removed { content, old_line } = &current {
            let next = iter.next_if(|next| matches!(next, LineDiff::Added { .. }));
            if let Some(LineDiff::Added {
                content: new_content,
                new_line,
            }) = next
            {
                paired.push(LineDiff::Modified {
                    word_diff: compute_word_diff(content, &new_content),
                    old_content: content.clone(),
                    new_content,
                    old_line: *old_line,
                    new_line,
                });
                continue;
            }
        }
        paired.push(current);
    }

    paired
}
