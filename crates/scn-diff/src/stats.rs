//! Summary counts over comparison and line diff results.

use serde::{Deserialize, Serialize};

use crate::compare::{ChangeKind, SceneComparison};
use crate::line_diff::{LineDiff, LineKind};

/// Scene counts per classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub moved: usize,
    pub unchanged: usize,
    pub total: usize,
}

impl ComparisonStats {
    pub fn from_comparisons(comparisons: &[SceneComparison]) -> Self {
        let mut stats = Self::default();
        for comparison in comparisons {
            match comparison.kind() {
                ChangeKind::Added => stats.added += 1,
                ChangeKind::Removed => stats.removed += 1,
                ChangeKind::Modified => stats.modified += 1,
                ChangeKind::Moved => stats.moved += 1,
                ChangeKind::Unchanged => stats.unchanged += 1,
            }
        }
        stats.total = comparisons.len();
        stats
    }

    /// Number of slots that are not `Unchanged`.
    pub fn changed(&self) -> usize {
        self.total - self.unchanged
    }

    /// Returns `true` if every slot is unchanged.
    pub fn is_clean(&self) -> bool {
        self.changed() == 0
    }
}

/// Line counts per classification within one scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
}

impl LineStats {
    pub fn from_lines(lines: &[LineDiff]) -> Self {
        let mut stats = Self::default();
        for line in lines {
            match line.kind() {
                LineKind::Added => stats.added += 1,
                LineKind::Removed => stats.removed += 1,
                LineKind::Modified => stats.modified += 1,
                LineKind::Unchanged => stats.unchanged += 1,
            }
        }
        stats
    }

    /// Total number of entries counted.
    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified + self.unchanged
    }
}
