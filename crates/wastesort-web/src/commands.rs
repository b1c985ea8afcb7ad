//! One-shot classification for the `classify` subcommand

use crate::view::ClassificationView;
use std::path::Path;
use wastesort_classifier::{classify_sample, ImageSample, ModelLoader};
use wastesort_core::Result;

/// Exit status when the model cannot be loaded
pub const EXIT_MODEL_UNAVAILABLE: i32 = 2;

/// Classify the image at `image` and render the result as text or JSON.
///
/// The model is checked before the image is read, so an unavailable model
/// is reported even when the image path is wrong.
pub fn classify_file(loader: &ModelLoader, image: &Path, json: bool) -> Result<String> {
    let classifier = loader.handle()?;
    let sample = ImageSample::from_path(image)?;
    let result = classify_sample(classifier.as_ref(), &sample)?;
    let view = ClassificationView::from(&result);

    if json {
        Ok(serde_json::to_string_pretty(&view)?)
    } else {
        Ok(view.to_text())
    }
}
