//! ONNX classifier backed by tract

use crate::classifier::ImageClassifier;
use crate::preprocess::{InputBatch, INPUT_SIZE};
use std::path::Path;
use tract_onnx::prelude::*;
use wastesort_core::{Error, Result};

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Frozen binary classifier exported to ONNX.
///
/// Expects a single NHWC `[1, 224, 224, 3]` f32 input and produces a
/// `[1, 1]` sigmoid output.
pub struct OnnxClassifier {
    plan: Plan,
    name: String,
}

impl OnnxClassifier {
    /// Load and optimize the model at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let side = INPUT_SIZE as usize;

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.with_input_fact(0, f32::fact([1, side, side, 3]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| Error::model_unavailable(format!("{e:#}")))?;

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "onnx".to_string());

        Ok(Self { plan, name })
    }
}

impl ImageClassifier for OnnxClassifier {
    fn predict(&self, batch: &InputBatch) -> Result<f32> {
        let input = Tensor::from_shape(&batch.shape(), batch.as_slice())
            .map_err(|e| Error::inference(format!("failed to build input tensor: {e}")))?;

        let outputs = self
            .plan
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| Error::inference(format!("forward pass failed: {e:#}")))?;

        let output = outputs
            .first()
            .ok_or_else(|| Error::inference("model produced no outputs"))?;
        let view = output
            .to_array_view::<f32>()
            .map_err(|e| Error::inference(format!("unexpected output type: {e}")))?;

        view.iter()
            .next()
            .copied()
            .ok_or_else(|| Error::inference("model produced an empty output"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
