//! Classifier trait and the classification entry points

use crate::preprocess::{preprocess, InputBatch};
use crate::sample::ImageSample;
use image::DynamicImage;
use std::time::Instant;
use wastesort_core::{ClassificationResult, Error, Result};

/// A frozen binary classifier: one batch in, one score out.
///
/// Implementations must be read-only after construction so a single
/// handle can be shared across requests.
pub trait ImageClassifier: Send + Sync {
    /// Run a forward pass on a batch of one image, returning the
    /// probability of the Recyclable class.
    fn predict(&self, batch: &InputBatch) -> Result<f32>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Preprocess, run inference, and apply the decision rule.
pub fn classify_image(
    classifier: &dyn ImageClassifier,
    image: &DynamicImage,
) -> Result<ClassificationResult> {
    let start = Instant::now();

    let batch = preprocess(image);
    let score = checked_score(classifier.predict(&batch)?)?;

    let result = ClassificationResult::from_score(score)
        .with_latency_us(start.elapsed().as_micros() as u64);

    tracing::debug!(
        classifier = classifier.name(),
        score,
        label = %result.label,
        confidence = result.confidence,
        latency_us = result.latency_us,
        "image classified"
    );

    Ok(result)
}

/// Validate and decode a sample, then classify it.
pub fn classify_sample(
    classifier: &dyn ImageClassifier,
    sample: &ImageSample,
) -> Result<ClassificationResult> {
    let image = sample.decode()?;
    classify_image(classifier, &image)
}

fn checked_score(score: f32) -> Result<f32> {
    if !score.is_finite() {
        return Err(Error::inference(format!(
            "classifier produced a non-finite score: {score}"
        )));
    }
    Ok(score.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use wastesort_core::WasteLabel;

    struct FixedScore(f32);

    impl ImageClassifier for FixedScore {
        fn predict(&self, batch: &InputBatch) -> Result<f32> {
            assert_eq!(batch.shape(), [1, 224, 224, 3]);
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn gray_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 16, Rgb([128, 128, 128])))
    }

    #[test]
    fn test_classify_image_applies_decision_rule() {
        let result = classify_image(&FixedScore(0.9), &gray_image()).unwrap();
        assert_eq!(result.label, WasteLabel::Recyclable);
        assert_eq!(result.confidence_text(), "90.00%");

        let result = classify_image(&FixedScore(0.5), &gray_image()).unwrap();
        assert_eq!(result.label, WasteLabel::NonRecyclable);
        assert!(result.is_low_confidence());
    }

    #[test]
    fn test_non_finite_score_is_rejected() {
        let err = classify_image(&FixedScore(f32::NAN), &gray_image()).unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }

    #[test]
    fn test_out_of_range_score_is_clamped() {
        let result = classify_image(&FixedScore(1.2), &gray_image()).unwrap();
        assert_eq!(result.score, 1.0);
        assert_eq!(result.confidence, 100.0);
    }
}
