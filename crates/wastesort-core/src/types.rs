//! Waste labels and the score decision rule

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores strictly above this are Recyclable; 0.5 itself is NonRecyclable.
pub const DECISION_THRESHOLD: f32 = 0.5;

/// Confidence percentages below this trigger a low-confidence warning.
pub const LOW_CONFIDENCE_THRESHOLD: f32 = 60.0;

/// The two output categories of the binary decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteLabel {
    Recyclable,
    NonRecyclable,
}

impl WasteLabel {
    /// Label for a raw classifier score
    pub fn from_score(score: f32) -> Self {
        if score > DECISION_THRESHOLD {
            Self::Recyclable
        } else {
            Self::NonRecyclable
        }
    }

    /// Snake_case identifier, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recyclable => "recyclable",
            Self::NonRecyclable => "non_recyclable",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Recyclable => "Recyclable",
            Self::NonRecyclable => "Non-Recyclable",
        }
    }
}

impl fmt::Display for WasteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Confidence percentage in [50, 100] for a score in [0, 1]
pub fn confidence(score: f32) -> f32 {
    score.max(1.0 - score) * 100.0
}

/// Outcome of classifying a single image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Binary decision
    pub label: WasteLabel,

    /// Raw classifier output in [0, 1], probability of Recyclable
    pub score: f32,

    /// `max(score, 1 - score) * 100`
    pub confidence: f32,

    /// Latency of preprocessing plus inference in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    /// Apply the decision rule to a classifier score
    pub fn from_score(score: f32) -> Self {
        Self {
            label: WasteLabel::from_score(score),
            score,
            confidence: confidence(score),
            latency_us: 0,
        }
    }

    /// Attach the measured latency
    pub fn with_latency_us(mut self, latency_us: u64) -> Self {
        self.latency_us = latency_us;
        self
    }

    /// Whether the result should carry a low-confidence warning
    pub fn is_low_confidence(&self) -> bool {
        self.confidence < LOW_CONFIDENCE_THRESHOLD
    }

    /// Confidence formatted with two decimals, e.g. `90.00%`
    pub fn confidence_text(&self) -> String {
        format!("{:.2}%", self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_high_recyclable_score() {
        let result = ClassificationResult::from_score(0.9);
        assert_eq!(result.label, WasteLabel::Recyclable);
        assert!((result.confidence - 90.0).abs() < 1e-4);
        assert_eq!(result.confidence_text(), "90.00%");
        assert!(!result.is_low_confidence());
    }

    #[test]
    fn test_boundary_score_is_non_recyclable() {
        let result = ClassificationResult::from_score(0.5);
        assert_eq!(result.label, WasteLabel::NonRecyclable);
        assert_eq!(result.confidence, 50.0);
        assert_eq!(result.confidence_text(), "50.00%");
        assert!(result.is_low_confidence());
    }

    #[test]
    fn test_low_score_is_confident_non_recyclable() {
        let result = ClassificationResult::from_score(0.1);
        assert_eq!(result.label, WasteLabel::NonRecyclable);
        assert_eq!(result.confidence_text(), "90.00%");
        assert!(!result.is_low_confidence());
    }

    #[test]
    fn test_warning_threshold_is_strict() {
        // 0.6 -> 60% exactly, which is not below the threshold
        assert!(!ClassificationResult::from_score(0.6).is_low_confidence());
        assert!(ClassificationResult::from_score(0.55).is_low_confidence());
        assert!(ClassificationResult::from_score(0.45).is_low_confidence());
    }

    #[test]
    fn test_label_serialization() {
        let json = serde_json::to_string(&WasteLabel::NonRecyclable).unwrap();
        assert_eq!(json, "\"non_recyclable\"");
        assert_eq!(WasteLabel::Recyclable.as_str(), "recyclable");
        assert_eq!(WasteLabel::NonRecyclable.to_string(), "Non-Recyclable");
    }

    proptest! {
        #[test]
        fn prop_confidence_matches_formula(score in 0.0f32..=1.0) {
            let result = ClassificationResult::from_score(score);
            prop_assert_eq!(result.confidence, score.max(1.0 - score) * 100.0);
            prop_assert!(result.confidence >= 50.0);
            prop_assert!(result.confidence <= 100.0);
        }

        #[test]
        fn prop_label_follows_strict_threshold(score in 0.0f32..=1.0) {
            let label = WasteLabel::from_score(score);
            if score > 0.5 {
                prop_assert_eq!(label, WasteLabel::Recyclable);
            } else {
                prop_assert_eq!(label, WasteLabel::NonRecyclable);
            }
        }
    }
}
