//! Per-scene detail: the line diff shown when one comparison slot is
//! selected.

use scn_types::{Scene, SceneNumber};
use serde::{Deserialize, Serialize};

use crate::compare::{ChangeKind, SceneComparison};
use crate::line_diff::{compute_line_diff_with_words, LineDiff};
use crate::stats::LineStats;

/// Line-level view of one comparison slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDetail {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub lines: Vec<LineDiff>,
    pub old_scene_num: Option<SceneNumber>,
    pub new_scene_num: Option<SceneNumber>,
}

impl SceneDetail {
    pub fn stats(&self) -> LineStats {
        LineStats::from_lines(&self.lines)
    }
}

/// Expand one comparison slot into line diffs.
///
/// - `Added`: every new line as added.
/// - `Removed`: every old line as removed.
/// - `Moved`: no lines; the content is identical up to normalization.
/// - `Modified` / `Unchanged`: the line diff of the two bodies.
pub fn scene_detail(comparison: &SceneComparison) -> SceneDetail {
    let lines = match comparison {
        SceneComparison::Added { new, .. } => all_added(new),
        SceneComparison::Removed { old, .. } => all_removed(old),
        SceneComparison::Moved { .. } => Vec::new(),
        SceneComparison::Modified { old, new, .. } | SceneComparison::Unchanged { old, new, .. } => {
            compute_line_diff_with_words(&old.content, &new.content)
        }
    };

    SceneDetail {
        kind: comparison.kind(),
        lines,
        old_scene_num: comparison.old_scene().map(|s| s.scene_num.clone()),
        new_scene_num: comparison.new_scene().map(|s| s.scene_num.clone()),
    }
}

/// Detail for the slot whose number is `scene_num`, if there is one.
pub fn detail_for(comparisons: &[SceneComparison], scene_num: &str) -> Option<SceneDetail> {
    comparisons
        .iter()
        .find(|c| *c.scene_num() == *scene_num)
        .map(scene_detail)
}

fn all_added(scene: &Scene) -> Vec<LineDiff> {
    scene
        .content
        .iter()
        .map(|line| LineDiff::Added {
            content: line.text.clone(),
            new_line: line.line_num,
        })
        .collect()
}

fn all_removed(scene: &Scene) -> Vec<LineDiff> {
    scene
        .content
        .iter()
        .map(|line| LineDiff::Removed {
            content: line.text.clone(),
            old_line: line.line_num,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare_texts;
    use crate::line_diff::LineKind;

    const OLD: &str = "#1. A\nHello world\nGoodbye\n#2. B\ngone\n#3. C\ntravels";
    const NEW: &str = "#1. A\nHello there\nGoodbye\n#4. C\ntravels\n#5. D\nnew one\nnew two";

    #[test]
    fn modified_scene_gets_line_diff() {
        let comparisons = compare_texts(OLD, NEW);
        let detail = detail_for(&comparisons, "1").unwrap();
        assert_eq!(detail.kind, ChangeKind::Modified);
        let kinds: Vec<_> = detail.lines.iter().map(LineDiff::kind).collect();
        assert_eq!(kinds, [LineKind::Modified, LineKind::Unchanged]);
        assert_eq!(detail.old_scene_num, Some(SceneNumber::from("1")));
        assert_eq!(detail.new_scene_num, Some(SceneNumber::from("1")));
    }

    #[test]
    fn removed_scene_lists_every_old_line() {
        let comparisons = compare_texts(OLD, NEW);
        let detail = detail_for(&comparisons, "2").unwrap();
        assert_eq!(detail.kind, ChangeKind::Removed);
        assert_eq!(
            detail.lines,
            vec![LineDiff::Removed {
                content: "gone".into(),
                old_line: 5
            }]
        );
        assert_eq!(detail.new_scene_num, None);
    }

    #[test]
    fn added_scene_lists_every_new_line() {
        let comparisons = compare_texts(OLD, NEW);
        let detail = detail_for(&comparisons, "5").unwrap();
        assert_eq!(detail.kind, ChangeKind::Added);
        assert_eq!(detail.stats().added, 2);
        assert_eq!(detail.lines[0].new_line(), Some(7));
        assert_eq!(detail.old_scene_num, None);
    }

    #[test]
    fn moved_scene_has_no_lines_but_both_numbers() {
        let comparisons = compare_texts(OLD, NEW);
        let detail = detail_for(&comparisons, "3").unwrap();
        assert_eq!(detail.kind, ChangeKind::Moved);
        assert!(detail.lines.is_empty());
        assert_eq!(detail.old_scene_num, Some(SceneNumber::from("3")));
        assert_eq!(detail.new_scene_num, Some(SceneNumber::from("4")));
    }

    #[test]
    fn moved_slot_is_found_by_old_number_only() {
        let comparisons = compare_texts(OLD, NEW);
        assert!(detail_for(&comparisons, "4").is_none());
        assert!(detail_for(&comparisons, "99").is_none());
    }

    #[test]
    fn unchanged_scene_is_all_unchanged_lines() {
        let comparisons = compare_texts("#1. A\nx\ny", "#1. A\nx\ny");
        let detail = scene_detail(&comparisons[0]);
        assert_eq!(detail.kind, ChangeKind::Unchanged);
        assert_eq!(detail.stats().unchanged, 2);
    }

    #[test]
    fn serializes_kind_as_type() {
        let comparisons = compare_texts(OLD, NEW);
        let json = serde_json::to_value(detail_for(&comparisons, "3").unwrap()).unwrap();
        assert_eq!(json["type"], "moved");
        assert_eq!(json["oldSceneNum"], "3");
        assert_eq!(json["newSceneNum"], "4");
    }
}
