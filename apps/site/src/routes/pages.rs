use axum::extract::Path;
use axum::http::{header, Uri};
use axum::response::IntoResponse;
use maud::Markup;

use crate::content;
use crate::errors::AppError;
use crate::render;

/// GET /
pub async fn home() -> Markup {
    render::home_page()
}

/// GET /about
pub async fn about() -> Markup {
    render::about_page()
}

/// GET /about/:phase
pub async fn phase(Path(slug): Path<String>) -> Result<Markup, AppError> {
    let article = content::article_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("No such chapter: {slug}")))?;
    Ok(render::phase_page(article))
}

/// GET /projects
pub async fn projects() -> Markup {
    render::projects_page()
}

/// GET /resume
pub async fn resume() -> Markup {
    render::resume_page()
}

const STYLESHEET: &str = include_str!("../../assets/styles.css");

/// GET /styles.css
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

/// Fallback for every route the surface does not name.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {uri}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_phase_handler_resolves_known_slugs() {
        for slug in ["phase1", "phase2", "phase3", "phase4"] {
            let markup = phase(Path(slug.to_string())).await.expect("known slug");
            assert!(markup.into_string().contains("article-body"));
        }
    }

    #[tokio::test]
    async fn test_phase_handler_rejects_unknown_slug() {
        let err = phase(Path("phase9".to_string())).await.err().expect("404");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
