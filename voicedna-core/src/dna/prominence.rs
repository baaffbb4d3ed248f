use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::score::Score;

/// Partial map of dimension → prominence score.
///
/// An absent key means "not computed", not "zero". The two consumers of
/// these scores treat absence differently on purpose: the timeline skips
/// the dimension, the comparison view defaults it to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProminenceScores(BTreeMap<Dimension, Score>);

impl ProminenceScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for a dimension, if computed.
    pub fn get(&self, dimension: Dimension) -> Option<Score> {
        self.0.get(&dimension).copied()
    }

    pub fn set(&mut self, dimension: Dimension, score: Score) {
        self.0.insert(dimension, score);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in canonical dimension order (BTreeMap keys sort by it).
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Score)> + '_ {
        self.0.iter().map(|(d, s)| (*d, *s))
    }
}

impl FromIterator<(Dimension, Score)> for ProminenceScores {
    fn from_iter<I: IntoIterator<Item = (Dimension, Score)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<Dimension, Score>> for ProminenceScores {
    fn from(map: BTreeMap<Dimension, Score>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_is_none() {
        let mut scores = ProminenceScores::new();
        scores.set(Dimension::Tone, Score::new(0.6));
        assert_eq!(scores.get(Dimension::Tone), Some(Score::new(0.6)));
        assert_eq!(scores.get(Dimension::Humor), None);
    }

    #[test]
    fn serde_round_trips_as_plain_map() {
        let scores: ProminenceScores = [
            (Dimension::Vocabulary, Score::new(0.5)),
            (Dimension::Tone, Score::new(0.6)),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"vocabulary":0.5,"tone":0.6}"#);
        let back: ProminenceScores = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scores);
    }

    #[test]
    fn iterates_in_canonical_order() {
        let scores: ProminenceScores = [
            (Dimension::Signatures, Score::new(0.1)),
            (Dimension::Vocabulary, Score::new(0.2)),
            (Dimension::Tone, Score::new(0.3)),
        ]
        .into_iter()
        .collect();
        let dims: Vec<Dimension> = scores.iter().map(|(d, _)| d).collect();
        assert_eq!(
            dims,
            vec![Dimension::Vocabulary, Dimension::Tone, Dimension::Signatures]
        );
    }
}
