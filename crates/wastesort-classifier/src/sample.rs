//! User-supplied images (file upload or camera capture)

use image::{DynamicImage, ImageFormat};
use std::path::Path;
use wastesort_core::{Error, Result};

/// File extensions accepted by the uploader
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

/// One image submitted for classification. Lives for a single request.
#[derive(Debug, Clone)]
pub struct ImageSample {
    filename: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl ImageSample {
    /// Create a sample from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: None,
            content_type: None,
            bytes: bytes.into(),
        }
    }

    /// Read a sample from disk, keeping the file name for validation
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        Ok(Self {
            filename,
            content_type: None,
            bytes,
        })
    }

    /// Set the original file name
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the declared MIME type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check the sample is non-empty and declared as jpg, jpeg or png.
    ///
    /// A file name extension takes precedence over the MIME type; a sample
    /// with neither is accepted and left to the decoder.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::NoImageProvided);
        }

        if let Some(extension) = self.filename.as_deref().and_then(extension_of) {
            if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
                return Err(Error::unsupported_image(format!(
                    "'.{extension}' files are not accepted, use one of: {}",
                    ALLOWED_EXTENSIONS.join(", ")
                )));
            }
            return Ok(());
        }

        match self.content_type.as_deref() {
            Some("image/jpeg" | "image/jpg" | "image/png") | None => Ok(()),
            Some(other) => Err(Error::unsupported_image(format!(
                "content type '{other}' is not accepted"
            ))),
        }
    }

    /// Validate and decode into an image
    pub fn decode(&self) -> Result<DynamicImage> {
        self.validate()?;

        let format = image::guess_format(&self.bytes)
            .map_err(|e| Error::invalid_image(e.to_string()))?;
        if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png) {
            return Err(Error::unsupported_image(format!(
                "decoded content is {format:?}, expected JPEG or PNG"
            )));
        }

        image::load_from_memory_with_format(&self.bytes, format)
            .map_err(|e| Error::invalid_image(e.to_string()))
    }
}

fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}
