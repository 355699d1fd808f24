use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::profile::document::validate_text;
use crate::profile::extract_profile;
use crate::profile::models::ProfileSections;

#[derive(Debug, Deserialize)]
pub struct ParseProfileRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ProfilePreviewResponse {
    pub profile: ProfileSections,
}

/// POST /api/v1/profile/parse
/// Structured extraction only, no scoring.
pub async fn handle_parse_profile(
    Json(req): Json<ParseProfileRequest>,
) -> Result<Json<ProfilePreviewResponse>, AppError> {
    let text = validate_text(&req.text)?;
    Ok(Json(ProfilePreviewResponse {
        profile: extract_profile(text),
    }))
}
