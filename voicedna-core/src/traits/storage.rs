use crate::dna::{ProfileVersion, VersionDraft};
use crate::errors::{DnaError, DnaResult};

/// Durable, append-only storage of profile versions.
///
/// Reads return `Option` and leave not-found handling to the caller;
/// operations that require a target to exist (`revert`) surface typed
/// errors instead.
pub trait IProfileStorage: Send + Sync {
    /// Persist a new immutable version, allocating the next number in
    /// the clone's chain (1 if none exist). Concurrent allocation for
    /// the same clone never produces duplicate numbers.
    fn create_version(&self, clone_id: &str, draft: VersionDraft) -> DnaResult<ProfileVersion>;

    /// Copy a historical version's content into a brand-new version with
    /// trigger `revert`. Fails with `VersionNotFound` if the target is
    /// absent.
    fn revert(&self, clone_id: &str, target_version: i64) -> DnaResult<ProfileVersion>;

    /// A specific version of a clone's chain.
    fn get_version(&self, clone_id: &str, version_number: i64)
        -> DnaResult<Option<ProfileVersion>>;

    /// The row with the highest version number, or None if the clone has
    /// no profile yet.
    fn get_current(&self, clone_id: &str) -> DnaResult<Option<ProfileVersion>>;

    /// All versions for a clone, newest first.
    fn list_versions(&self, clone_id: &str) -> DnaResult<Vec<ProfileVersion>>;

    /// Whether the clone has at least one version (merge eligibility).
    fn has_profile(&self, clone_id: &str) -> DnaResult<bool>;

    /// `get_current` for callers to whom a missing profile is an error.
    fn require_current(&self, clone_id: &str) -> DnaResult<ProfileVersion> {
        self.get_current(clone_id)?.ok_or_else(|| DnaError::ProfileNotFound {
            clone_id: clone_id.to_string(),
        })
    }
}
