use anyhow::anyhow;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyze_document;
use crate::analysis::models::{AdvancedMetrics, AnalysisReport};
use crate::errors::AppError;
use crate::extract::{extract_text, DocumentFormat};
use crate::profile::models::ProfileSections;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub scorer_backend: String,
    pub profile: ProfileSections,
    pub report: AnalysisReport,
    pub advanced: AdvancedMetrics,
}

/// Runs one analysis on the blocking pool with a perturbation source built from
/// the configured scoring mode. Keyword matching over a large document is CPU-bound.
async fn run_analysis(
    state: AppState,
    text: String,
    profile_image: Option<String>,
) -> Result<AnalysisResponse, AppError> {
    let scorer = state.scorer.clone();
    let mode = state.config.scoring_mode;

    let analysis = tokio::task::spawn_blocking(move || {
        let mut perturbation = mode.perturbation();
        analyze_document(&text, profile_image, scorer.as_ref(), perturbation.as_mut())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("Analysis task failed: {e}")))??;

    Ok(AnalysisResponse {
        analysis_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        scorer_backend: state.scorer.backend().to_string(),
        profile: analysis.profile,
        report: analysis.report,
        advanced: analysis.advanced,
    })
}

/// POST /api/v1/analysis
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let response = run_analysis(state, req.text, req.profile_image).await?;
    Ok(Json(response))
}

/// POST /api/v1/analysis/upload
/// Multipart form: `file` (PDF or UTF-8 text, required), `profile_image` (optional).
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut document: Option<(Vec<u8>, DocumentFormat)> = None;
    let mut profile_image: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some("file") => {
                let content_type = field.content_type().map(str::to_owned);
                let file_name = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await.map_err(multipart_error)?;

                if bytes.len() > state.config.max_upload_bytes {
                    return Err(AppError::PayloadTooLarge(format!(
                        "Document is {} bytes; the limit is {}",
                        bytes.len(),
                        state.config.max_upload_bytes
                    )));
                }

                let format =
                    DocumentFormat::detect(content_type.as_deref(), file_name.as_deref(), &bytes);
                document = Some((bytes.to_vec(), format));
            }
            Some("profile_image") => {
                let value = field.text().await.map_err(multipart_error)?;
                profile_image = Some(value).filter(|v| !v.trim().is_empty());
            }
            _ => {}
        }
    }

    let (bytes, format) = document
        .ok_or_else(|| AppError::Validation("Missing 'file' part in upload".to_string()))?;
    info!(?format, size = bytes.len(), "Received profile upload");

    let text = extract_text(bytes, format).await?;
    let response = run_analysis(state, text, profile_image).await?;
    Ok(Json(response))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(err.body_text())
    }
}
