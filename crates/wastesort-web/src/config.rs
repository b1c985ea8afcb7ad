//! Application configuration

use crate::cli::ModelArgs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wastesort_classifier::{ModelLocation, DEFAULT_MODEL_FILENAME};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Listen address
    #[serde(default = "default_address")]
    pub address: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Model artifact location
    #[serde(default)]
    pub model: ModelConfig,

    /// Largest accepted upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

/// Where to find the classifier artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Directory containing the model; the executable's directory when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Model filename
    #[serde(default = "default_model_filename")]
    pub filename: String,
}

impl AppConfig {
    /// Load configuration from file, falling back to defaults when the file
    /// does not exist
    pub fn load(config_path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_path = config_path.as_ref();
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config = serde_yaml::from_str(&content)?;
            tracing::debug!("Loaded configuration from {}", config_path.display());
            Ok(config)
        } else {
            tracing::debug!(
                "No configuration file at {}, using defaults",
                config_path.display()
            );
            Ok(Self::default())
        }
    }

    /// Apply CLI overrides
    pub fn with_overrides(
        mut self,
        address: Option<String>,
        port: Option<u16>,
        model: &ModelArgs,
    ) -> Self {
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self.model = self.model.with_overrides(model);
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            model: ModelConfig::default(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl ModelConfig {
    /// Apply CLI overrides
    pub fn with_overrides(mut self, args: &ModelArgs) -> Self {
        if let Some(directory) = &args.model_dir {
            self.directory = Some(directory.clone());
        }
        if let Some(filename) = &args.model_file {
            self.filename = filename.clone();
        }
        self
    }

    /// Resolve to a concrete location, defaulting to the executable's directory
    pub fn location(&self) -> wastesort_core::Result<ModelLocation> {
        let directory = match &self.directory {
            Some(directory) => directory.clone(),
            None => ModelLocation::beside_executable()?.directory,
        };
        Ok(ModelLocation::new(directory, self.filename.clone()))
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename: default_model_filename(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_model_filename() -> String {
    DEFAULT_MODEL_FILENAME.to_string()
}

fn default_max_upload_bytes() -> usize {
    20 * 1024 * 1024
}
