pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::profile::handlers as profile;
use crate::state::AppState;

/// Multipart framing overhead allowed on top of the document limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Profile extraction
        .route("/api/v1/profile/parse", post(profile::handle_parse_profile))
        // Founder analysis
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .route("/api/v1/analysis/upload", post(analysis::handle_upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
