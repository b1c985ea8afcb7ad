use crate::content;
use crate::server::ApiError;
use crate::state::AppState;
use crate::telemetry;
use crate::view::ClassificationView;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use wastesort_classifier::{classify_sample, ImageSample};
use wastesort_core::Error;

/// Multipart field carrying the uploaded or captured image
pub const IMAGE_FIELD: &str = "image";

// ============================================================================
// Health endpoints
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn model_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.model.status())
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        ),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            "metrics recorder not installed\n".to_string(),
        ),
    }
}

// ============================================================================
// Static content endpoints
// ============================================================================

pub async fn dashboard() -> impl IntoResponse {
    Json(content::dashboard())
}

pub async fn dataset(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dataset.view())
}

// ============================================================================
// Classification endpoint
// ============================================================================

pub async fn classify(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ClassificationView>, ApiError> {
    // A request without a multipart body carries no image at all
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!("Classify request without multipart body: {}", rejection);
        Error::NoImageProvided
    })?;

    let sample = read_image_field(multipart)
        .await?
        .filter(|sample| !sample.is_empty())
        .ok_or(Error::NoImageProvided)?;

    let classifier = state.model.handle()?;

    tracing::debug!(
        filename = sample.filename().unwrap_or("<none>"),
        bytes = sample.bytes().len(),
        "Classifying image"
    );

    let result = tokio::task::spawn_blocking(move || classify_sample(classifier.as_ref(), &sample))
        .await
        .map_err(|e| Error::internal(format!("classification task failed: {e}")))??;

    telemetry::record_classification(&result);
    tracing::info!(
        label = %result.label,
        confidence = result.confidence,
        latency_us = result.latency_us,
        "Image classified"
    );

    Ok(Json(ClassificationView::from(&result)))
}

async fn read_image_field(mut multipart: Multipart) -> Result<Option<ImageSample>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        let mut sample = ImageSample::new(bytes.to_vec());
        if let Some(filename) = filename {
            sample = sample.with_filename(filename);
        }
        if let Some(content_type) = content_type {
            sample = sample.with_content_type(content_type);
        }
        return Ok(Some(sample));
    }

    Ok(None)
}
