use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports the service version and whether the static asset tree the pages
/// reference is actually present on disk.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let images = state.config.public_dir.join("images").is_dir();
    let resume = state.config.public_dir.join("resume/Resume.pdf").is_file();
    let status = if images && resume { "ok" } else { "degraded" };

    Json(json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "service": "portfolio-site",
        "assets": {
            "images": images,
            "resume_pdf": resume,
        }
    }))
}
