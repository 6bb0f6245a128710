//! Diff engine for screenplay revisions.
//!
//! Compares two parsed revisions scene by scene, then on demand diffs the
//! bodies of a matched scene line by line, with a word-level diff for every
//! line that was rewritten in place.
//!
//! # Key Types
//!
//! - [`SceneComparison`] / [`ChangeKind`] -- Scene-level classification (unchanged/added/removed/modified/moved)
//! - [`LineDiff`] / [`WordDiff`] -- Line-level diff with word detail for modified lines
//! - [`Edit`] -- Generic LCS edit script underlying both levels
//! - [`SceneDetail`] -- Line view of one comparison slot
//! - [`ComparisonFilter`] / [`ComparisonStats`] -- Display helpers over comparison lists
//! - [`ComparisonCache`] -- Memoized comparisons keyed on the text pair

pub mod cache;
pub mod compare;
pub mod detail;
pub mod error;
pub mod filter;
pub mod lcs;
pub mod line_diff;
pub mod stats;
pub mod word_diff;

pub use cache::{CacheConfig, CacheStats, ComparisonCache};
pub use compare::{
    compare_scenes, compare_scenes_with, compare_texts, ChangeKind, CompareConfig,
    DuplicatePolicy, Revision, SceneComparison,
};
pub use detail::{detail_for, scene_detail, SceneDetail};
pub use error::{DiffError, DiffResult};
pub use filter::ComparisonFilter;
pub use lcs::{align, align_eq, lcs_len, Edit};
pub use line_diff::{compute_line_diff_with_words, LineDiff, LineKind};
pub use stats::{ComparisonStats, LineStats};
pub use word_diff::{compute_word_diff, tokenize, WordDiff, WordKind};
