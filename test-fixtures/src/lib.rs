//! Shared test builders for voice DNA profiles, versions, and payloads,
//! used by integration tests across crates.

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use voicedna_core::dna::{Dimension, ProfileVersion, ProminenceScores, Score, Trigger, VoiceDna};

/// A complete analysis payload with every dimension key present,
/// the shape an analysis collaborator hands over.
pub fn analysis_payload() -> Value {
    json!({
        "vocabulary": {
            "complexity_level": "advanced",
            "jargon_usage": "moderate",
            "contraction_frequency": "high",
            "word_choice_patterns": ["prefers concrete verbs"]
        },
        "sentence_structure": {
            "average_length": "medium",
            "complexity_variation": "high",
            "fragment_usage": "occasional",
            "patterns": ["starts with conjunctions"]
        },
        "paragraph_structure": {
            "average_length": "short",
            "transition_style": "abrupt",
            "organization": "associative"
        },
        "tone": {
            "formality_level": "casual",
            "warmth": "high",
            "primary_tone": "conversational",
            "secondary_tone": "wry"
        },
        "rhetorical_devices": {
            "metaphor_usage": "frequent",
            "repetition_patterns": "anaphora",
            "rhetorical_questions": "rare",
            "storytelling_tendency": "strong"
        },
        "punctuation": {
            "em_dash_frequency": "high",
            "semicolon_usage": "never",
            "exclamation_points": "rare",
            "parenthetical_asides": "frequent",
            "ellipsis_usage": "occasional"
        },
        "openings_and_closings": {
            "opening_patterns": ["personal anecdote"],
            "hook_style": "question",
            "closing_patterns": ["call back to opening"],
            "cta_style": "soft"
        },
        "humor": {
            "frequency": "occasional",
            "types": ["dry", "self-deprecating"],
            "placement": "mid-paragraph"
        },
        "signatures": {
            "catchphrases": ["here's the thing"],
            "recurring_themes": ["craft over talent"],
            "unique_mannerisms": ["numbered asides"]
        }
    })
}

/// A fully populated typed profile.
pub fn sample_dna() -> VoiceDna {
    VoiceDna::from_value(&analysis_payload()).expect("fixture payload is complete")
}

/// Scores for the given (dimension, value) pairs.
pub fn scores(pairs: &[(Dimension, f64)]) -> ProminenceScores {
    pairs
        .iter()
        .map(|&(d, v)| (d, Score::new(v)))
        .collect()
}

/// A free-standing version row, for tests that don't need a store.
pub fn make_version(
    clone_id: &str,
    version_number: i64,
    score_pairs: &[(Dimension, f64)],
) -> ProfileVersion {
    ProfileVersion {
        id: Uuid::new_v4().to_string(),
        clone_id: clone_id.to_string(),
        version_number,
        dna: sample_dna(),
        prominence_scores: Some(scores(score_pairs)),
        trigger: Trigger::InitialAnalysis,
        model_used: "gpt-4o".to_string(),
        created_at: Utc::now(),
    }
}

/// A version row whose prominence scores were never computed.
pub fn make_unscored_version(clone_id: &str, version_number: i64) -> ProfileVersion {
    ProfileVersion {
        id: Uuid::new_v4().to_string(),
        clone_id: clone_id.to_string(),
        version_number,
        dna: sample_dna(),
        prominence_scores: None,
        trigger: Trigger::ManualEdit,
        model_used: String::new(),
        created_at: Utc::now(),
    }
}
