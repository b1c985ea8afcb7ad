use crate::content;
use crate::telemetry;
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use wastesort_core::Error;

/// JSON error body returned by the API
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Wrapper turning core errors into HTTP responses
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::NoImageProvided | Error::UnsupportedImage(_) => StatusCode::BAD_REQUEST,
            Error::ImageTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::InvalidImage(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let (message, detail) = match &self.0 {
            Error::ModelUnavailable(reason) => (
                content::MODEL_UNAVAILABLE_MESSAGE.to_string(),
                Some(reason.clone()),
            ),
            Error::NoImageProvided => (content::NO_IMAGE_MESSAGE.to_string(), None),
            other => (other.to_string(), None),
        };

        ErrorBody {
            error: self.0.kind(),
            message,
            detail,
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self(Error::image_too_large(
                "the upload exceeds the size limit, try a smaller photo",
            ));
        }
        Self(Error::invalid_image(format!("malformed upload: {}", error.body_text())))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        telemetry::record_error(&self.0);
        if self.0.is_client_error() {
            tracing::warn!(kind = self.0.kind(), "Rejected request: {}", self.0);
        } else {
            tracing::error!(kind = self.0.kind(), "Request failed: {}", self.0);
        }

        (self.status(), Json(self.body())).into_response()
    }
}
