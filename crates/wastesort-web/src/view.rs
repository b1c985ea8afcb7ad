//! User-facing rendering of a classification result

use crate::content::{self, Advice};
use serde::Serialize;
use wastesort_core::{ClassificationResult, WasteLabel};

/// What the classification page shows after "Analyse"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationView {
    pub label: WasteLabel,
    pub headline: &'static str,
    pub score: f32,
    pub confidence: f32,
    /// Two-decimal percentage, e.g. `90.00%`
    pub confidence_text: String,
    /// Present when confidence is below 60%; never replaces the result
    pub warning: Option<String>,
    pub advice: Advice,
    pub latency_ms: f64,
}

impl From<&ClassificationResult> for ClassificationView {
    fn from(result: &ClassificationResult) -> Self {
        let confidence_text = result.confidence_text();
        let warning = result
            .is_low_confidence()
            .then(|| content::low_confidence_warning(&confidence_text));

        Self {
            label: result.label,
            headline: content::headline(result.label),
            score: result.score,
            confidence: result.confidence,
            confidence_text,
            warning,
            advice: content::advice(result.label),
            latency_ms: result.latency_us as f64 / 1000.0,
        }
    }
}

impl ClassificationView {
    /// Plain-text rendering for the command line
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(warning) = &self.warning {
            out.push_str(&format!("WARNING: {warning}\n"));
        }
        out.push_str(&format!("{}\n", self.headline));
        out.push_str(&format!("Confidence: {}\n", self.confidence_text));
        out.push_str(&format!("{}:\n", self.advice.heading));
        for tip in &self.advice.tips {
            out.push_str(&format!("  - {tip}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(score: f32) -> ClassificationView {
        ClassificationView::from(&ClassificationResult::from_score(score))
    }

    #[test]
    fn test_confident_recyclable() {
        let view = view(0.9);
        assert_eq!(view.label, WasteLabel::Recyclable);
        assert_eq!(view.headline, "RESULT: RECYCLABLE");
        assert_eq!(view.confidence_text, "90.00%");
        assert_eq!(view.warning, None);
        assert_eq!(view.advice, content::advice(WasteLabel::Recyclable));
    }

    #[test]
    fn test_boundary_shows_warning_and_result() {
        let view = view(0.5);
        assert_eq!(view.label, WasteLabel::NonRecyclable);
        assert_eq!(view.confidence_text, "50.00%");
        assert_eq!(
            view.warning.as_deref(),
            Some("Inconclusive result (50.00%). Try taking a clearer photo.")
        );
        assert_eq!(view.advice, content::advice(WasteLabel::NonRecyclable));
    }

    #[test]
    fn test_confident_non_recyclable() {
        let view = view(0.1);
        assert_eq!(view.label, WasteLabel::NonRecyclable);
        assert_eq!(view.headline, "RESULT: NON-RECYCLABLE");
        assert_eq!(view.confidence_text, "90.00%");
        assert!(view.warning.is_none());
    }

    #[test]
    fn test_text_rendering() {
        let text = view(0.52).to_text();
        assert!(text.starts_with("WARNING: "));
        assert!(text.contains("RESULT: RECYCLABLE"));
        assert!(text.contains("Confidence: 52.00%"));
    }
}
