//! Placeholder API that predates the real diagnosis backend.
//!
//! Serves the hello route plus two empty stubs kept so the frontend's
//! navigation targets resolve while the real endpoints live in
//! `meddx-api`.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Body of the hello route.
#[derive(Serialize)]
struct HelloResponse {
    message: &'static str,
}

/// GET /
async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello world!",
    })
}

/// GET /diagnosis -- placeholder, no body yet.
async fn diagnosis() -> StatusCode {
    StatusCode::OK
}

/// GET /translator -- placeholder, no body yet.
async fn translator() -> StatusCode {
    StatusCode::OK
}

/// Build the stub router.
fn app() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/diagnosis", get(diagnosis))
        .route("/translator", get(translator))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meddx_stub=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".into())
        .parse()
        .expect("PORT must be a valid u16");

    let addr = SocketAddr::new(host.parse().expect("Invalid HOST address"), port);
    tracing::info!(%addr, "Starting stub server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app())
        .await
        .expect("Server error");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn hello_returns_message() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "Hello world!");
    }

    #[tokio::test]
    async fn stub_routes_return_empty_ok() {
        for path in ["/diagnosis", "/translator"] {
            let response = app()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            assert!(bytes.is_empty(), "{path} should have an empty body");
        }
    }
}
