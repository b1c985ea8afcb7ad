//! WasteSort Classifier
//!
//! Turns a user image into a recyclability decision.
//!
//! The pipeline has three stages:
//! - [`sample`]: validate and decode an uploaded or camera-captured image
//! - [`preprocess`]: resize to 224x224 and apply MobileNetV2 normalization
//! - [`classifier`]: run the cached model and apply the decision rule
//!
//! The model itself is an opaque ONNX artifact loaded once per process by
//! [`ModelLoader`].

pub mod classifier;
pub mod model_loader;
pub mod onnx;
pub mod preprocess;
pub mod sample;

pub use classifier::{classify_image, classify_sample, ImageClassifier};
pub use model_loader::{
    LoadOutcome, ModelLoader, ModelLocation, ModelStatus, DEFAULT_MODEL_FILENAME,
};
pub use onnx::OnnxClassifier;
pub use preprocess::{preprocess, InputBatch, INPUT_SIZE};
pub use sample::{ImageSample, ALLOWED_EXTENSIONS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{classify_image, classify_sample, ImageClassifier};
    pub use crate::model_loader::{LoadOutcome, ModelLoader, ModelLocation};
    pub use crate::sample::ImageSample;
}
