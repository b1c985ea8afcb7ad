//! WasteSort Core
//!
//! Types shared by every WasteSort component.
//!
//! This crate provides:
//! - The error taxonomy and result alias
//! - The binary waste label and the score-to-result decision rule
//! - Confidence thresholds used by the classification views

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    ClassificationResult, WasteLabel, DECISION_THRESHOLD, LOW_CONFIDENCE_THRESHOLD,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{ClassificationResult, WasteLabel};
}
