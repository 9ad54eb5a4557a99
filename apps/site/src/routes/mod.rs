pub mod health;
pub mod pages;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let images_dir = state.config.public_dir.join("images");
    let resume_pdf = state.config.public_dir.join("resume/Resume.pdf");

    Router::new()
        .route("/health", get(health::health_handler))
        // Page surface
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/about/:phase", get(pages::phase))
        .route("/projects", get(pages::projects))
        .route("/resume", get(pages::resume))
        .route("/styles.css", get(pages::stylesheet))
        // Static assets, externally supplied under the public directory
        .nest_service("/images", ServeDir::new(images_dir))
        .route_service("/resume/Resume.pdf", ServeFile::new(resume_pdf))
        .fallback(pages::not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::state::AppState;

    use super::build_router;

    fn test_router() -> axum::Router {
        build_router(AppState {
            config: Config {
                port: 8080,
                public_dir: "public".into(),
                rust_log: "info".into(),
            },
        })
    }

    async fn get_page(path: &str) -> (StatusCode, String) {
        let response = test_router()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_every_page_route_serves_html() {
        for path in [
            "/", "/about", "/about/phase1", "/about/phase2", "/about/phase3", "/about/phase4",
            "/projects", "/resume",
        ] {
            let (status, body) = get_page(path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(body.starts_with("<!DOCTYPE html>"), "{path}");
        }
    }

    #[tokio::test]
    async fn test_unknown_phase_is_404() {
        let (status, body) = get_page("/about/phase9").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("No such chapter: phase9"));
    }

    #[tokio::test]
    async fn test_fallback_renders_html_404() {
        let (status, body) = get_page("/skills").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("404"));
        assert!(body.starts_with("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_health_reports_service_and_version() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["service"], "portfolio-site");
        assert_eq!(doc["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_stylesheet_is_css() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/styles.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/css"));
    }
}
