//! Scene-level comparison: match scenes between two revisions by number and
//! by content hash.
//!
//! Scenes sharing a number are `Unchanged` or `Modified` depending on their
//! hashes. A scene whose number disappeared is paired with a scene whose
//! number is new and whose content hash is the same; such a pair is reported
//! as one `Moved` record instead of a `Removed` + `Added` pair.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use scn_parse::parse_scenes;
use scn_types::{Scene, SceneHash, SceneNumber};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DiffError, DiffResult};

/// Classification of one scene slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Unchanged,
    Added,
    Removed,
    Modified,
    Moved,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 5] = [
        ChangeKind::Unchanged,
        ChangeKind::Added,
        ChangeKind::Removed,
        ChangeKind::Modified,
        ChangeKind::Moved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Unchanged => "unchanged",
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Modified => "modified",
            ChangeKind::Moved => "moved",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeKind {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChangeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DiffError::UnknownChangeKind(s.to_string()))
    }
}

/// The relationship of one scene slot between the old revision (`scene1`)
/// and the new revision (`scene2`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneComparison {
    /// Same number, same content hash.
    #[serde(rename_all = "camelCase")]
    Unchanged {
        scene_num: SceneNumber,
        #[serde(rename = "scene1")]
        old: Scene,
        #[serde(rename = "scene2")]
        new: Scene,
    },
    /// Same number, different content hash.
    #[serde(rename_all = "camelCase")]
    Modified {
        scene_num: SceneNumber,
        #[serde(rename = "scene1")]
        old: Scene,
        #[serde(rename = "scene2")]
        new: Scene,
    },
    /// Number only in the new revision, with no move partner.
    #[serde(rename_all = "camelCase")]
    Added {
        scene_num: SceneNumber,
        #[serde(rename = "scene2")]
        new: Scene,
    },
    /// Number only in the old revision, with no move partner.
    #[serde(rename_all = "camelCase")]
    Removed {
        scene_num: SceneNumber,
        #[serde(rename = "scene1")]
        old: Scene,
    },
    /// Same content under a number that is new, replacing a number that
    /// disappeared. `scene_num` is the old number.
    #[serde(rename_all = "camelCase")]
    Moved {
        scene_num: SceneNumber,
        new_scene_num: SceneNumber,
        #[serde(rename = "scene1")]
        old: Scene,
        #[serde(rename = "scene2")]
        new: Scene,
    },
}

impl SceneComparison {
    /// The slot's number; the old number for `Moved`.
    pub fn scene_num(&self) -> &SceneNumber {
        match self {
            SceneComparison::Unchanged { scene_num, .. }
            | SceneComparison::Modified { scene_num, .. }
            | SceneComparison::Added { scene_num, .. }
            | SceneComparison::Removed { scene_num, .. }
            | SceneComparison::Moved { scene_num, .. } => scene_num,
        }
    }

    /// The number in the new revision, only for `Moved`.
    pub fn new_scene_num(&self) -> Option<&SceneNumber> {
        match self {
            SceneComparison::Moved { new_scene_num, .. } => Some(new_scene_num),
            _ => None,
        }
    }

    pub fn kind(&self) -> ChangeKind {
        match self {
            SceneComparison::Unchanged { .. } => ChangeKind::Unchanged,
            SceneComparison::Modified { .. } => ChangeKind::Modified,
            SceneComparison::Added { .. } => ChangeKind::Added,
            SceneComparison::Removed { .. } => ChangeKind::Removed,
            SceneComparison::Moved { .. } => ChangeKind::Moved,
        }
    }

    pub fn old_scene(&self) -> Option<&Scene> {
        match self {
            SceneComparison::Unchanged { old, .. }
            | SceneComparison::Modified { old, .. }
            | SceneComparison::Removed { old, .. }
            | SceneComparison::Moved { old, .. } => Some(old),
            SceneComparison::Added { .. } => None,
        }
    }

    pub fn new_scene(&self) -> Option<&Scene> {
        match self {
            SceneComparison::Unchanged { new, .. }
            | SceneComparison::Modified { new, .. }
            | SceneComparison::Added { new, .. }
            | SceneComparison::Moved { new, .. } => Some(new),
            SceneComparison::Removed { .. } => None,
        }
    }

    /// Returns `true` for everything except `Unchanged`.
    pub fn is_change(&self) -> bool {
        self.kind() != ChangeKind::Unchanged
    }
}

/// Which side of a comparison a scene came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    Old,
    New,
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::Old => f.write_str("old"),
            Revision::New => f.write_str("new"),
        }
    }
}

/// What to do when one revision repeats a scene number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The first scene in document order is compared; later ones are ignored.
    #[default]
    KeepFirst,
    /// The last scene in document order is compared.
    KeepLast,
    /// Fail with [`DiffError::DuplicateSceneNumber`].
    Reject,
}

/// Options for [`compare_scenes_with`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    pub duplicates: DuplicatePolicy,
    /// When `false`, renumbered scenes are reported as removed + added.
    pub detect_moves: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::KeepFirst,
            detect_moves: true,
        }
    }
}

/// Compare two parsed revisions with the default configuration.
///
/// Every scene number of either revision appears exactly once in the
/// result, except that a `Moved` record stands in for the removed number
/// and the added number it pairs. The result is sorted by [`SceneNumber`]
/// order of [`SceneComparison::scene_num`].
pub fn compare_scenes(old: &[Scene], new: &[Scene]) -> Vec<SceneComparison> {
    // KeepFirst never rejects.
    compare_scenes_with(old, new, &CompareConfig::default()).unwrap_or_default()
}

/// Parse both texts and compare them with the default configuration.
pub fn compare_texts(old_text: &str, new_text: &str) -> Vec<SceneComparison> {
    compare_scenes(&parse_scenes(old_text), &parse_scenes(new_text))
}

/// Compare two parsed revisions.
///
/// Runs in two phases so the result does not depend on iteration order:
/// first all move pairings are fixed, visiting vanished numbers in ascending
/// order and pairing each with the smallest unpaired new number of equal
/// hash; then every remaining number is classified.
pub fn compare_scenes_with(
    old: &[Scene],
    new: &[Scene],
    config: &CompareConfig,
) -> DiffResult<Vec<SceneComparison>> {
    let old_index = index_by_number(old, config.duplicates, Revision::Old)?;
    let new_index = index_by_number(new, config.duplicates, Revision::New)?;

    let mut comparisons = Vec::with_capacity(old_index.len().max(new_index.len()));
    let mut vanished: Vec<&Scene> = Vec::new();

    for (&num, &old_scene) in &old_index {
        match new_index.get(&num) {
            Some(&new_scene) if new_scene.hash == old_scene.hash => {
                comparisons.push(SceneComparison::Unchanged {
                    scene_num: num.clone(),
                    old: old_scene.clone(),
                    new: new_scene.clone(),
                });
            }
            Some(&new_scene) => {
                comparisons.push(SceneComparison::Modified {
                    scene_num: num.clone(),
                    old: old_scene.clone(),
                    new: new_scene.clone(),
                });
            }
            None => vanished.push(old_scene),
        }
    }

    // Candidates per hash, smallest number first.
    let mut appeared: HashMap<SceneHash, VecDeque<&Scene>> = HashMap::new();
    for (&num, &new_scene) in &new_index {
        if !old_index.contains_key(&num) {
            appeared.entry(new_scene.hash).or_default().push_back(new_scene);
        }
    }

    for old_scene in vanished {
        let partner = if config.detect_moves {
            appeared
                .get_mut(&old_scene.hash)
                .and_then(VecDeque::pop_front)
        } else {
            None
        };

        comparisons.push(match partner {
            Some(new_scene) => SceneComparison::Moved {
                scene_num: old_scene.scene_num.clone(),
                new_scene_num: new_scene.scene_num.clone(),
                old: old_scene.clone(),
                new: new_scene.clone(),
            },
            None => SceneComparison::Removed {
                scene_num: old_scene.scene_num.clone(),
                old: old_scene.clone(),
            },
        });
    }

    comparisons.extend(
        appeared
            .into_values()
            .flatten()
            .map(|new_scene| SceneComparison::Added {
                scene_num: new_scene.scene_num.clone(),
                new: new_scene.clone(),
            }),
    );

    comparisons.sort_by(|a, b| a.scene_num().cmp(b.scene_num()));

    debug!(
        old = old.len(),
        new = new.len(),
        slots = comparisons.len(),
        changed = comparisons.iter().filter(|c| c.is_change()).count(),
        "compared scenes"
    );

    Ok(comparisons)
}

fn index_by_number(
    scenes: &[Scene],
    policy: DuplicatePolicy,
    revision: Revision,
) -> DiffResult<BTreeMap<&SceneNumber, &Scene>> {
    let mut index = BTreeMap::new();
    for scene in scenes {
        match index.entry(&scene.scene_num) {
            Entry::Vacant(slot) => {
                slot.insert(scene);
            }
            Entry::Occupied(mut slot) => {
                warn!(%revision, scene = %scene.scene_num, ?policy, "duplicate scene number");
                match policy {
                    DuplicatePolicy::KeepFirst => {}
                    DuplicatePolicy::KeepLast => {
                        slot.insert(scene);
                    }
                    DuplicatePolicy::Reject => {
                        return Err(DiffError::DuplicateSceneNumber {
                            revision,
                            scene_num: scene.scene_num.clone(),
                        });
                    }
                }
            }
        }
    }
    Ok(index)
}
