use std::fmt;

use serde::{Deserialize, Serialize};

/// Prominence score clamped to [0.0, 1.0].
/// Summarizes how strongly a dimension shows in a writer's voice.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64")]
pub struct Score(f64);

impl Score {
    /// Create a new Score, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The score in whole points, as presentation surfaces render it.
    pub fn points(self) -> i32 {
        (self.0 * 100.0).round() as i32
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(Score::new(1.7).value(), 1.0);
        assert_eq!(Score::new(-0.2).value(), 0.0);
    }

    #[test]
    fn deserialization_clamps_like_the_constructor() {
        let high: Score = serde_json::from_str("1.7").unwrap();
        assert_eq!(high.value(), 1.0);
        let low: Score = serde_json::from_str("-0.2").unwrap();
        assert_eq!(low.value(), 0.0);
    }

    #[test]
    fn points_rounds_to_nearest() {
        assert_eq!(Score::new(0.284).points(), 28);
        assert_eq!(Score::new(0.286).points(), 29);
        assert_eq!(Score::new(1.0).points(), 100);
    }
}
