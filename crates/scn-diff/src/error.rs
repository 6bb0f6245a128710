//! Error types for the diff crate.

use scn_types::SceneNumber;

use crate::compare::Revision;

/// Errors that can occur during diff operations.
///
/// The default comparison never fails; these surface only when a caller
/// opts into strict checks or parses user-supplied names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// A revision contains the same scene number more than once and the
    /// duplicate policy is `Reject`.
    #[error("duplicate scene number #{scene_num} in {revision} revision")]
    DuplicateSceneNumber {
        revision: Revision,
        scene_num: SceneNumber,
    },

    /// A change kind name did not match any known kind.
    #[error("unknown change kind: {0}")]
    UnknownChangeKind(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
