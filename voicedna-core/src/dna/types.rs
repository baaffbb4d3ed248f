//! Typed per-dimension content structs.
//!
//! Each of the 9 dimensions is a named record with documented literal
//! fields rather than an open JSON map, so malformed payloads are caught
//! structurally. Every struct carries a flattened `extra` map as the
//! narrow extension point for forward-compatible optional fields.
//! Analysis collaborators may omit individual attributes (they default to
//! empty); omitting a whole dimension key is a validation error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dimension::Dimension;
use crate::errors::ValidationError;

/// Word choice habits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyContent {
    pub complexity_level: String,
    pub jargon_usage: String,
    pub contraction_frequency: String,
    pub word_choice_patterns: Vec<String>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Sentence length and shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceStructureContent {
    pub average_length: String,
    pub complexity_variation: String,
    pub fragment_usage: String,
    pub patterns: Vec<String>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Paragraph organization and flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStructureContent {
    pub average_length: String,
    pub transition_style: String,
    pub organization: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Formality, warmth, and dominant tones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneContent {
    pub formality_level: String,
    pub warmth: String,
    pub primary_tone: String,
    pub secondary_tone: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Metaphor, repetition, and storytelling habits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RhetoricalDevicesContent {
    pub metaphor_usage: String,
    pub repetition_patterns: String,
    pub rhetorical_questions: String,
    pub storytelling_tendency: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Distinctive punctuation habits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PunctuationContent {
    pub em_dash_frequency: String,
    pub semicolon_usage: String,
    pub exclamation_points: String,
    pub parenthetical_asides: String,
    pub ellipsis_usage: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// How pieces begin and end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningsAndClosingsContent {
    pub opening_patterns: Vec<String>,
    pub hook_style: String,
    pub closing_patterns: Vec<String>,
    pub cta_style: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Humor frequency, kind, and placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumorContent {
    pub frequency: String,
    pub types: Vec<String>,
    pub placement: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Catchphrases and recurring mannerisms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignaturesContent {
    pub catchphrases: Vec<String>,
    pub recurring_themes: Vec<String>,
    pub unique_mannerisms: Vec<String>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// A complete voice DNA payload: one record per canonical dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceDna {
    pub vocabulary: VocabularyContent,
    pub sentence_structure: SentenceStructureContent,
    pub paragraph_structure: ParagraphStructureContent,
    pub tone: ToneContent,
    pub rhetorical_devices: RhetoricalDevicesContent,
    pub punctuation: PunctuationContent,
    pub openings_and_closings: OpeningsAndClosingsContent,
    pub humor: HumorContent,
    pub signatures: SignaturesContent,
}

impl VoiceDna {
    /// Parse a raw collaborator payload into a typed profile.
    ///
    /// Every canonical dimension key must be present; the first missing
    /// key is reported. Individual attributes inside a dimension may be
    /// omitted.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;
        for dim in Dimension::ALL {
            if !obj.contains_key(dim.key()) {
                return Err(ValidationError::MissingDimension { key: dim.key() });
            }
        }
        serde_json::from_value(value.clone()).map_err(|e| ValidationError::Malformed {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "vocabulary": {"complexity_level": "advanced"},
            "sentence_structure": {"average_length": "medium"},
            "paragraph_structure": {"organization": "linear"},
            "tone": {"formality_level": "casual", "primary_tone": "warm"},
            "rhetorical_devices": {"metaphor_usage": "frequent"},
            "punctuation": {"em_dash_frequency": "high"},
            "openings_and_closings": {"hook_style": "question"},
            "humor": {"frequency": "occasional", "types": ["dry"]},
            "signatures": {"catchphrases": ["so it goes"]}
        })
    }

    #[test]
    fn parses_payload_with_partial_attributes() {
        let dna = VoiceDna::from_value(&full_payload()).unwrap();
        assert_eq!(dna.vocabulary.complexity_level, "advanced");
        assert_eq!(dna.tone.primary_tone, "warm");
        // Omitted attributes default to empty.
        assert!(dna.vocabulary.jargon_usage.is_empty());
        assert!(dna.signatures.recurring_themes.is_empty());
    }

    #[test]
    fn missing_dimension_key_is_rejected() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("humor");
        let err = VoiceDna::from_value(&payload).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingDimension { key: "humor" }
        ));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = VoiceDna::from_value(&json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, ValidationError::NotAnObject));
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let mut payload = full_payload();
        payload["tone"]["register_shift"] = json!("mid-sentence");
        let dna = VoiceDna::from_value(&payload).unwrap();
        assert_eq!(dna.tone.extra["register_shift"], json!("mid-sentence"));
        let back = serde_json::to_value(&dna).unwrap();
        assert_eq!(back["tone"]["register_shift"], json!("mid-sentence"));
    }
}
