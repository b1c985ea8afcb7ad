//! Mock classifiers for testing
//!
//! Configurable implementations of the ImageClassifier trait used to
//! exercise the model loader cache and the classification entry points
//! without a real ONNX artifact.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use wastesort_classifier::{
    classify_sample, ImageClassifier, ImageSample, InputBatch, LoadOutcome, ModelLoader,
    ModelLocation, ModelStatus, DEFAULT_MODEL_FILENAME,
};
use wastesort_core::{Error, Result, WasteLabel};

/// A classifier returning a fixed score and counting its calls
pub struct MockClassifier {
    name: String,
    score: f32,
    call_count: AtomicU32,
}

impl MockClassifier {
    /// Create a new mock classifier with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            score: 0.5,
            call_count: AtomicU32::new(0),
        }
    }

    /// Set the score this classifier will return
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Get the number of times predict was called
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl ImageClassifier for MockClassifier {
    fn predict(&self, batch: &InputBatch) -> Result<f32> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        assert_eq!(batch.shape(), [1, 224, 224, 3]);
        Ok(self.score)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A classifier that always fails - for testing error paths
pub struct FailingClassifier;

impl ImageClassifier for FailingClassifier {
    fn predict(&self, _batch: &InputBatch) -> Result<f32> {
        Err(Error::inference("Simulated classifier failure"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn jpeg_sample() -> ImageSample {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 200, Rgb([40, 90, 200])));
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Jpeg).unwrap();
    ImageSample::new(buffer.into_inner()).with_filename("bottle.jpg")
}

/// Loader whose backend counts how often it reads the model file
fn counting_loader(dir: &Path, score: f32) -> (ModelLoader, Arc<AtomicU32>) {
    let loads = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&loads);
    let loader = ModelLoader::with_backend(
        ModelLocation::new(dir, DEFAULT_MODEL_FILENAME),
        move |path: &Path| {
            counter.fetch_add(1, Ordering::SeqCst);
            std::fs::read(path)?;
            let classifier = MockClassifier::new("counted").with_score(score);
            Ok(Arc::new(classifier) as Arc<dyn ImageClassifier>)
        },
    );
    (loader, loads)
}

#[test]
fn test_loader_is_idempotent() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(DEFAULT_MODEL_FILENAME), b"weights").unwrap();

    let (loader, loads) = counting_loader(dir.path(), 0.9);
    assert!(!loader.is_initialized());

    let first = loader.handle().unwrap();
    let second = loader.handle().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert!(loader.is_initialized());
}

#[test]
fn test_missing_model_lists_directory() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("README.md"), b"readme").unwrap();
    std::fs::write(dir.path().join("app.py"), b"print()").unwrap();

    let (loader, loads) = counting_loader(dir.path(), 0.9);

    match loader.load() {
        LoadOutcome::NotFound {
            path,
            directory_listing,
        } => {
            assert_eq!(path, &dir.path().join(DEFAULT_MODEL_FILENAME));
            assert_eq!(directory_listing, &vec!["README.md".to_string(), "app.py".to_string()]);
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }

    // The failure is cached as well
    assert!(matches!(loader.handle(), Err(Error::ModelUnavailable(_))));
    assert!(matches!(loader.handle(), Err(Error::ModelUnavailable(_))));
    assert_eq!(loads.load(Ordering::SeqCst), 0);
}

#[test]
fn test_corrupt_model_reports_underlying_error() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(DEFAULT_MODEL_FILENAME), b"not an onnx graph").unwrap();

    let loader = ModelLoader::new(ModelLocation::new(dir.path(), DEFAULT_MODEL_FILENAME));

    assert!(matches!(loader.load(), LoadOutcome::Corrupt { .. }));
    match loader.status() {
        ModelStatus::Corrupt { reason, .. } => assert!(!reason.is_empty()),
        other => panic!("Expected Corrupt status, got {:?}", other),
    }

    let err = loader.handle().err().unwrap();
    assert!(err.to_string().contains("could not be loaded"));
}

#[test]
fn test_unavailable_model_performs_no_inference() {
    let dir = tempfile::tempdir().unwrap();
    let (loader, _) = counting_loader(dir.path(), 0.9);

    let result = loader
        .handle()
        .and_then(|classifier| classify_sample(classifier.as_ref(), &jpeg_sample()));

    assert!(matches!(result, Err(Error::ModelUnavailable(_))));
}

#[test]
fn test_classify_sample_with_mock() {
    let classifier = MockClassifier::new("mock").with_score(0.1);

    let result = classify_sample(&classifier, &jpeg_sample()).unwrap();

    assert_eq!(result.label, WasteLabel::NonRecyclable);
    assert_eq!(result.confidence_text(), "90.00%");
    assert!(!result.is_low_confidence());
    assert_eq!(classifier.call_count(), 1);
}

#[test]
fn test_empty_sample_never_reaches_classifier() {
    let classifier = MockClassifier::new("mock").with_score(0.9);

    let result = classify_sample(&classifier, &ImageSample::new(Vec::new()));

    assert!(matches!(result, Err(Error::NoImageProvided)));
    assert_eq!(classifier.call_count(), 0);
}

#[test]
fn test_failing_classifier_propagates_error() {
    let result = classify_sample(&FailingClassifier, &jpeg_sample());
    assert!(matches!(result, Err(Error::Inference(_))));
}
