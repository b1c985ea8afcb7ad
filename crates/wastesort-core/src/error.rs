//! Error types for WasteSort

/// Result type alias using WasteSort's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for WasteSort operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The classifier artifact is missing or could not be deserialized
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// A classification was requested without an uploaded or captured image
    #[error("no image provided")]
    NoImageProvided,

    /// The image was not a jpg, jpeg or png
    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),

    /// The upload is larger than the configured limit
    #[error("image too large: {0}")]
    ImageTooLarge(String),

    /// The image bytes could not be decoded
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The forward pass failed or produced an unusable score
    #[error("inference error: {0}")]
    Inference(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new model-unavailable error
    pub fn model_unavailable(msg: impl Into<String>) -> Self {
        Self::ModelUnavailable(msg.into())
    }

    /// Create a new unsupported-image error
    pub fn unsupported_image(msg: impl Into<String>) -> Self {
        Self::UnsupportedImage(msg.into())
    }

    /// Create a new image-too-large error
    pub fn image_too_large(msg: impl Into<String>) -> Self {
        Self::ImageTooLarge(msg.into())
    }

    /// Create a new invalid-image error
    pub fn invalid_image(msg: impl Into<String>) -> Self {
        Self::InvalidImage(msg.into())
    }

    /// Create a new inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Stable snake_case name of the error kind, used in API bodies and metric labels
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ModelUnavailable(_) => "model_unavailable",
            Self::NoImageProvided => "no_image_provided",
            Self::UnsupportedImage(_) => "unsupported_image",
            Self::ImageTooLarge(_) => "image_too_large",
            Self::InvalidImage(_) => "invalid_image",
            Self::Inference(_) => "inference",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::Internal(_) => "internal",
        }
    }

    /// Whether the error was caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NoImageProvided
                | Self::UnsupportedImage(_)
                | Self::ImageTooLarge(_)
                | Self::InvalidImage(_)
        )
    }
}
