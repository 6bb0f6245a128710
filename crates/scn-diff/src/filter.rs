//! Narrowing a comparison list for display: by kind, by free-text search
//! over headers and bodies, and by an allow-list of scene numbers.

use std::collections::BTreeSet;

use scn_types::{Scene, SceneNumber};
use serde::{Deserialize, Serialize};

use crate::compare::{ChangeKind, SceneComparison};

/// Criteria a comparison slot must meet to be shown. All set criteria must
/// hold; the default filter passes everything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonFilter {
    /// Only slots of this kind.
    pub kind: Option<ChangeKind>,
    /// Drop `Unchanged` slots.
    pub hide_unchanged: bool,
    /// Case-insensitive substring; empty means no search.
    pub query: Option<String>,
    /// Search scene headers of either side.
    pub search_headers: bool,
    /// Search scene bodies of either side.
    pub search_content: bool,
    /// Only slots whose (old) number is listed.
    pub scene_numbers: Option<BTreeSet<SceneNumber>>,
}

impl Default for ComparisonFilter {
    fn default() -> Self {
        Self {
            kind: None,
            hide_unchanged: false,
            query: None,
            search_headers: true,
            search_content: true,
            scene_numbers: None,
        }
    }
}

impl ComparisonFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: ChangeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn hiding_unchanged(mut self) -> Self {
        self.hide_unchanged = true;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn restricted_to<I, N>(mut self, numbers: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<SceneNumber>,
    {
        self.scene_numbers = Some(numbers.into_iter().map(Into::into).collect());
        self
    }

    pub fn matches(&self, comparison: &SceneComparison) -> bool {
        if let Some(numbers) = &self.scene_numbers {
            if !numbers.contains(comparison.scene_num()) {
                return false;
            }
        }
        if self.hide_unchanged && !comparison.is_change() {
            return false;
        }
        if self.kind.is_some_and(|kind| kind != comparison.kind()) {
            return false;
        }
        match self.query.as_deref() {
            Some(query) if !query.is_empty() => self.matches_query(comparison, &query.to_lowercase()),
            _ => true,
        }
    }

    /// Matching slots, in input order.
    pub fn apply<'a>(&self, comparisons: &'a [SceneComparison]) -> Vec<&'a SceneComparison> {
        comparisons.iter().filter(|c| self.matches(c)).collect()
    }

    fn matches_query(&self, comparison: &SceneComparison, query: &str) -> bool {
        let sides = [comparison.old_scene(), comparison.new_scene()];
        let scenes = sides.iter().flatten();

        let in_header = self.search_headers
            && scenes
                .clone()
                .any(|scene| scene.header.to_lowercase().contains(query));
        let in_content = self.search_content
            && scenes
                .clone()
                .any(|scene| searchable_body(scene).contains(query));

        in_header || in_content
    }
}

/// Body lines joined with spaces, lowercased.
fn searchable_body(scene: &Scene) -> String {
    scene
        .content
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
