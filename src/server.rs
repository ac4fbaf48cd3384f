//! Static host for the compiled site bundle
//!
//! Serves files from the configured root and answers every other path with
//! the index document so client-side routes can be deep-linked.

use axum::Router;
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::core::config::{ConfigError, SiteConfig};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Build the router serving `config.root`
pub fn build_router(config: &SiteConfig) -> Router {
    // Pre-compressed bundles from the release build are preferred when present
    let files = ServeDir::new(&config.root)
        .precompressed_br()
        .precompressed_gzip()
        .fallback(ServeFile::new(config.index_path()));

    Router::new()
        .fallback_service(files)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process receives Ctrl+C
pub async fn serve(config: SiteConfig) -> Result<(), ServerError> {
    if !config.has_bundle() {
        tracing::warn!(
            index = %config.index_path().display(),
            "site bundle not found, run `trunk build` first"
        );
    }

    let app = build_router(&config);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;

    tracing::info!(
        "listening on http://{} (root: {})",
        config.addr,
        config.root.display()
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use std::path::PathBuf;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>keystone</body></html>";

    /// Fresh bundle directory with an index and one asset
    fn bundle(name: &str) -> SiteConfig {
        let root: PathBuf =
            std::env::temp_dir().join(format!("keystone-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(root.join("icons")).unwrap();
        std::fs::write(root.join("index.html"), INDEX).unwrap();
        std::fs::write(
            root.join("icons/star.svg"),
            "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>",
        )
        .unwrap();

        SiteConfig {
            root,
            ..SiteConfig::default()
        }
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_serves_index_at_root() {
        let config = bundle("root");
        let (status, body) = get(build_router(&config), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_serves_existing_asset() {
        let config = bundle("asset");
        let (status, body) = get(build_router(&config), "/icons/star.svg").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<svg"));
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let config = bundle("routes");
        for path in ["/about", "/office-spaces", "/booking", "/contact", "/no-such-page"] {
            let (status, body) = get(build_router(&config), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, INDEX, "{path}");
        }
    }

    #[tokio::test]
    async fn test_compresses_when_accepted() {
        let config = bundle("gzip");
        std::fs::write(config.root.join("big.txt"), "keystone ".repeat(512)).unwrap();

        let response = build_router(&config)
            .oneshot(
                Request::get("/big.txt")
                    .header(header::ACCEPT_ENCODING, "gzip")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_ENCODING).unwrap(),
            "gzip"
        );
    }
}
