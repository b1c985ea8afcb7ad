//! One-time loading of the classifier artifact
//!
//! The model lives at a fixed filename next to the running executable.
//! [`ModelLoader`] attempts the load exactly once and caches the
//! [`LoadOutcome`], so every later caller sees the same handle (or the same
//! failure) without touching the filesystem again.

use crate::classifier::ImageClassifier;
use crate::onnx::OnnxClassifier;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{error, info, warn};
use wastesort_core::{Error, Result};

/// Filename of the frozen classifier
pub const DEFAULT_MODEL_FILENAME: &str = "best_waste_model.onnx";

/// Deserializer turning a model file into a shared classifier handle
pub type ModelBackend = dyn Fn(&Path) -> Result<Arc<dyn ImageClassifier>> + Send + Sync;

/// Where the model artifact is expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelLocation {
    pub directory: PathBuf,
    pub filename: String,
}

impl ModelLocation {
    pub fn new(directory: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
        }
    }

    /// The default filename in the directory containing the running executable
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let directory = exe
            .parent()
            .ok_or_else(|| Error::config(format!("executable has no parent: {}", exe.display())))?;
        Ok(Self::new(directory, DEFAULT_MODEL_FILENAME))
    }

    /// Full path of the artifact
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Result of the single load attempt
#[derive(Clone)]
pub enum LoadOutcome {
    /// The classifier is ready
    Loaded(Arc<dyn ImageClassifier>),

    /// No file at the expected path
    NotFound {
        path: PathBuf,
        /// Sorted entries of the model directory, for diagnostics
        directory_listing: Vec<String>,
    },

    /// The file exists but could not be deserialized
    Corrupt { path: PathBuf, reason: String },
}

impl LoadOutcome {
    /// The classifier handle, if loading succeeded
    pub fn handle(&self) -> Option<&Arc<dyn ImageClassifier>> {
        match self {
            Self::Loaded(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Message shown to users when the classifier cannot be used
    pub fn unavailable_reason(&self) -> Option<String> {
        match self {
            Self::Loaded(_) => None,
            Self::NotFound { path, .. } => {
                Some(format!("model file not found: {}", path.display()))
            }
            Self::Corrupt { path, reason } => Some(format!(
                "model file {} is present but could not be loaded: {}",
                path.display(),
                reason
            )),
        }
    }
}

impl fmt::Debug for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(handle) => f.debug_tuple("Loaded").field(&handle.name()).finish(),
            Self::NotFound {
                path,
                directory_listing,
            } => f
                .debug_struct("NotFound")
                .field("path", path)
                .field("directory_listing", directory_listing)
                .finish(),
            Self::Corrupt { path, reason } => f
                .debug_struct("Corrupt")
                .field("path", path)
                .field("reason", reason)
                .finish(),
        }
    }
}

/// Serializable view of the loader state for status endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModelStatus {
    Loaded {
        name: String,
        path: PathBuf,
    },
    NotFound {
        path: PathBuf,
        directory_listing: Vec<String>,
    },
    Corrupt {
        path: PathBuf,
        reason: String,
    },
}

/// Loads the classifier once and hands out the cached result
pub struct ModelLoader {
    location: ModelLocation,
    backend: Box<ModelBackend>,
    outcome: OnceLock<LoadOutcome>,
}

impl ModelLoader {
    /// Create a loader using the ONNX backend
    pub fn new(location: ModelLocation) -> Self {
        Self::with_backend(location, |path: &Path| {
            let classifier = OnnxClassifier::load(path)?;
            Ok(Arc::new(classifier) as Arc<dyn ImageClassifier>)
        })
    }

    /// Create a loader with a custom deserializer
    pub fn with_backend<F>(location: ModelLocation, backend: F) -> Self
    where
        F: Fn(&Path) -> Result<Arc<dyn ImageClassifier>> + Send + Sync + 'static,
    {
        Self {
            location,
            backend: Box::new(backend),
            outcome: OnceLock::new(),
        }
    }

    pub fn location(&self) -> &ModelLocation {
        &self.location
    }

    /// Load the model on first call; later calls return the cached outcome
    pub fn load(&self) -> &LoadOutcome {
        self.outcome.get_or_init(|| self.attempt_load())
    }

    /// Whether the load has already been attempted
    pub fn is_initialized(&self) -> bool {
        self.outcome.get().is_some()
    }

    /// The shared classifier, or `ModelUnavailable`
    pub fn handle(&self) -> Result<Arc<dyn ImageClassifier>> {
        let outcome = self.load();
        match outcome.handle() {
            Some(handle) => Ok(Arc::clone(handle)),
            None => Err(Error::model_unavailable(
                outcome.unavailable_reason().unwrap_or_default(),
            )),
        }
    }

    /// Serializable status, loading the model if needed
    pub fn status(&self) -> ModelStatus {
        match self.load() {
            LoadOutcome::Loaded(handle) => ModelStatus::Loaded {
                name: handle.name().to_string(),
                path: self.location.path(),
            },
            LoadOutcome::NotFound {
                path,
                directory_listing,
            } => ModelStatus::NotFound {
                path: path.clone(),
                directory_listing: directory_listing.clone(),
            },
            LoadOutcome::Corrupt { path, reason } => ModelStatus::Corrupt {
                path: path.clone(),
                reason: reason.clone(),
            },
        }
    }

    fn attempt_load(&self) -> LoadOutcome {
        let path = self.location.path();

        if !path.is_file() {
            let directory_listing = list_directory(&self.location.directory);
            error!(
                path = %path.display(),
                "Model file not found"
            );
            info!(
                directory = %self.location.directory.display(),
                files = ?directory_listing,
                "Files in model directory"
            );
            return LoadOutcome::NotFound {
                path,
                directory_listing,
            };
        }

        match (self.backend)(&path) {
            Ok(handle) => {
                info!(path = %path.display(), model = handle.name(), "Model loaded");
                LoadOutcome::Loaded(handle)
            }
            Err(e) => {
                let reason = match e {
                    Error::ModelUnavailable(reason) => reason,
                    other => other.to_string(),
                };
                error!(path = %path.display(), %reason, "Model found but failed to load");
                LoadOutcome::Corrupt { path, reason }
            }
        }
    }
}

fn list_directory(directory: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(directory = %directory.display(), "Failed to read model directory: {}", e);
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_path() {
        let location = ModelLocation::new("/opt/wastesort", DEFAULT_MODEL_FILENAME);
        assert_eq!(
            location.path(),
            PathBuf::from("/opt/wastesort/best_waste_model.onnx")
        );
    }

    #[test]
    fn test_beside_executable_uses_default_filename() {
        let location = ModelLocation::beside_executable().unwrap();
        assert_eq!(location.filename, DEFAULT_MODEL_FILENAME);
        assert!(location.directory.is_dir());
    }

    #[test]
    fn test_unreadable_directory_lists_nothing() {
        assert!(list_directory(Path::new("/nonexistent/wastesort")).is_empty());
    }

    #[test]
    fn test_status_serialization() {
        let status = ModelStatus::Corrupt {
            path: PathBuf::from("model.onnx"),
            reason: "bad header".to_string(),
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "corrupt");
        assert_eq!(json["reason"], "bad header");
    }
}
