use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The 9 fixed style dimensions of a voice DNA profile.
///
/// Declaration order is the canonical order: every list the system
/// produces (timeline deltas, comparison rows) follows it, and `Ord`
/// sorts by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Vocabulary,
    SentenceStructure,
    ParagraphStructure,
    Tone,
    RhetoricalDevices,
    Punctuation,
    OpeningsAndClosings,
    Humor,
    Signatures,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 9] = [
        Dimension::Vocabulary,
        Dimension::SentenceStructure,
        Dimension::ParagraphStructure,
        Dimension::Tone,
        Dimension::RhetoricalDevices,
        Dimension::Punctuation,
        Dimension::OpeningsAndClosings,
        Dimension::Humor,
        Dimension::Signatures,
    ];

    /// Wire key used in JSON payloads and score maps.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Vocabulary => "vocabulary",
            Dimension::SentenceStructure => "sentence_structure",
            Dimension::ParagraphStructure => "paragraph_structure",
            Dimension::Tone => "tone",
            Dimension::RhetoricalDevices => "rhetorical_devices",
            Dimension::Punctuation => "punctuation",
            Dimension::OpeningsAndClosings => "openings_and_closings",
            Dimension::Humor => "humor",
            Dimension::Signatures => "signatures",
        }
    }

    /// Human-readable label for presentation surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Vocabulary => "Vocabulary",
            Dimension::SentenceStructure => "Sentence Structure",
            Dimension::ParagraphStructure => "Paragraph Structure",
            Dimension::Tone => "Tone",
            Dimension::RhetoricalDevices => "Rhetorical Devices",
            Dimension::Punctuation => "Punctuation",
            Dimension::OpeningsAndClosings => "Openings and Closings",
            Dimension::Humor => "Humor",
            Dimension::Signatures => "Signatures",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.key() == s)
            .ok_or_else(|| format!("unknown dimension key '{s}'"))
    }
}
