//! The in-memory merge authoring session.
//!
//! Lifecycle: no session (Empty) → `begin` validates sources and seeds
//! default weights (SourcesSelected) → `set_weight` adjustments
//! (Weighted) → `submit` consumes the session and yields the normalized
//! matrix (Submitted), or `abandon` consumes it with no trace
//! (Abandoned). Nothing is ever written to durable storage.

use voicedna_core::dna::Dimension;
use voicedna_core::errors::{DnaResult, ValidationError};
use voicedna_core::traits::IProfileStorage;

use crate::resolver::MergeWeightResolver;
use crate::weights::{NormalizedShares, WeightMatrix};

/// A single-actor merge session over 2–5 validated sources.
#[derive(Debug, Clone)]
pub struct MergeSession {
    sources: Vec<String>,
    matrix: WeightMatrix,
}

impl MergeSession {
    /// Start a session over the given candidate sources.
    ///
    /// Fails if the count is outside [2, 5] or any candidate has no
    /// current profile; on success every weight cell starts at the
    /// default.
    pub fn begin(store: &dyn IProfileStorage, clone_ids: &[String]) -> DnaResult<Self> {
        MergeWeightResolver::validate_sources(store, clone_ids)?;
        Ok(Self {
            sources: clone_ids.to_vec(),
            matrix: WeightMatrix::with_default_weights(clone_ids),
        })
    }

    /// Adjust one weight cell.
    ///
    /// Only the sources validated at `begin` are addressable; any other
    /// clone id is rejected, so unvalidated sources can never enter the
    /// matrix handed to the blending collaborator.
    pub fn set_weight(&mut self, clone_id: &str, dimension: Dimension, weight: f64) -> DnaResult<()> {
        if !self.sources.iter().any(|s| s == clone_id) {
            return Err(ValidationError::SourceNotSelected {
                clone_id: clone_id.to_string(),
            }
            .into());
        }
        self.matrix.set(clone_id, dimension, weight)?;
        Ok(())
    }

    /// Selected source ids, in selection order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// The raw weight matrix as currently authored.
    pub fn weights(&self) -> &WeightMatrix {
        &self.matrix
    }

    /// Submit: consume the session and hand the normalized matrix to the
    /// blending collaborator.
    pub fn submit(self) -> NormalizedShares {
        MergeWeightResolver::normalize(&self.matrix)
    }

    /// Abandon: discard the session, leaving no trace.
    pub fn abandon(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use voicedna_core::dna::{ProfileVersion, VersionDraft};
    use voicedna_core::errors::{DnaError, ValidationError};

    /// Store stub that knows which clones have DNA.
    struct StubStore(HashSet<String>);

    impl IProfileStorage for StubStore {
        fn create_version(&self, _: &str, _: VersionDraft) -> DnaResult<ProfileVersion> {
            unimplemented!("not used by session tests")
        }
        fn revert(&self, _: &str, _: i64) -> DnaResult<ProfileVersion> {
            unimplemented!("not used by session tests")
        }
        fn get_version(&self, _: &str, _: i64) -> DnaResult<Option<ProfileVersion>> {
            Ok(None)
        }
        fn get_current(&self, _: &str) -> DnaResult<Option<ProfileVersion>> {
            Ok(None)
        }
        fn list_versions(&self, _: &str) -> DnaResult<Vec<ProfileVersion>> {
            Ok(Vec::new())
        }
        fn has_profile(&self, clone_id: &str) -> DnaResult<bool> {
            Ok(self.0.contains(clone_id))
        }
    }

    fn store_with(ids: &[&str]) -> StubStore {
        StubStore(ids.iter().map(|s| s.to_string()).collect())
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rejects_too_few_or_too_many_sources() {
        let store = store_with(&["a", "b", "c", "d", "e", "f"]);

        let err = MergeSession::begin(&store, &ids(&["a"])).unwrap_err();
        assert!(matches!(
            err,
            DnaError::Validation(ValidationError::SourceCountOutOfRange { count: 1 })
        ));

        let err = MergeSession::begin(&store, &ids(&["a", "b", "c", "d", "e", "f"])).unwrap_err();
        assert!(matches!(
            err,
            DnaError::Validation(ValidationError::SourceCountOutOfRange { count: 6 })
        ));

        assert!(MergeSession::begin(&store, &ids(&["a", "b"])).is_ok());
        assert!(MergeSession::begin(&store, &ids(&["a", "b", "c", "d", "e"])).is_ok());
    }

    #[test]
    fn rejects_source_without_dna() {
        let store = store_with(&["a"]);
        let err = MergeSession::begin(&store, &ids(&["a", "no-dna"])).unwrap_err();
        match err {
            DnaError::Validation(ValidationError::IneligibleSource { clone_id }) => {
                assert_eq!(clone_id, "no-dna");
            }
            other => panic!("expected IneligibleSource, got {other:?}"),
        }
    }

    #[test]
    fn session_seeds_defaults_and_normalizes_on_submit() {
        let store = store_with(&["a", "b"]);
        let mut session = MergeSession::begin(&store, &ids(&["a", "b"])).unwrap();
        assert_eq!(session.weights().get("a", Dimension::Tone), 50.0);

        session.set_weight("a", Dimension::Tone, 75.0).unwrap();
        session.set_weight("b", Dimension::Tone, 25.0).unwrap();

        let shares = session.submit();
        assert_eq!(shares.share(Dimension::Tone, "a"), Some(0.75));
        assert_eq!(shares.share(Dimension::Tone, "b"), Some(0.25));
        // Untouched dimensions split the defaults evenly.
        assert_eq!(shares.share(Dimension::Humor, "a"), Some(0.5));
    }

    #[test]
    fn unselected_clone_cannot_receive_a_weight() {
        let store = store_with(&["a", "b"]);
        let mut session = MergeSession::begin(&store, &ids(&["a", "b"])).unwrap();

        let err = session.set_weight("c", Dimension::Tone, 100.0).unwrap_err();
        assert!(matches!(
            err,
            DnaError::Validation(ValidationError::SourceNotSelected { .. })
        ));

        // The rejected id never reaches the normalized output.
        let shares = session.submit();
        assert_eq!(shares.share(Dimension::Tone, "c"), None);
        assert_eq!(shares.share(Dimension::Tone, "a"), Some(0.5));
    }

    #[test]
    fn out_of_range_weight_is_rejected_and_ignored() {
        let store = store_with(&["a", "b"]);
        let mut session = MergeSession::begin(&store, &ids(&["a", "b"])).unwrap();
        assert!(session.set_weight("a", Dimension::Tone, 101.0).is_err());
        assert_eq!(session.weights().get("a", Dimension::Tone), 50.0);
    }
}
