//! Shared helpers for the API integration tests: fake collaborators,
//! router construction mirroring `main.rs`, and small HTTP utilities.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use meddx_aivm::{AivmError, EncryptedInput, ModelType, SecureInference};
use meddx_api::config::ServerConfig;
use meddx_api::routes;
use meddx_api::state::AppState;
use meddx_core::labels::{DIAGNOSIS_MODEL, IMAGE_MODEL};
use meddx_core::tensor::ImageTensor;
use meddx_translate::{TranslateError, Translator};

// ---------------------------------------------------------------------------
// Fake secure inference service
// ---------------------------------------------------------------------------

/// Deterministic in-memory stand-in for the AIVM node.
///
/// Registration rejects duplicates with a 409 so bootstrap idempotence
/// is observable; prediction returns a configured vector per model.
pub struct FakeInference {
    outputs: Mutex<HashMap<String, Vec<f32>>>,
    registered: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeInference {
    /// A fake with sensible defaults: a uniform 22-vector for the text
    /// model and a vector peaking at index 2 ("Non demented") for the
    /// image model.
    pub fn new() -> Self {
        let mut outputs = HashMap::new();
        outputs.insert(DIAGNOSIS_MODEL.to_string(), vec![0.0; 22]);
        outputs.insert(IMAGE_MODEL.to_string(), vec![0.1, 0.2, 5.0, 0.3]);
        Self {
            outputs: Mutex::new(outputs),
            registered: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A fake where every inference operation fails.
    pub fn failing() -> Self {
        Self {
            outputs: Mutex::new(HashMap::new()),
            registered: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Override the raw output vector returned for `model`.
    pub fn set_output(&self, model: &str, output: Vec<f32>) {
        self.outputs
            .lock()
            .unwrap()
            .insert(model.to_string(), output);
    }

    /// Names of models registered so far, in registration order.
    pub fn registered(&self) -> Vec<String> {
        self.registered.lock().unwrap().clone()
    }

    fn service_error(&self) -> AivmError {
        AivmError::Api {
            status: 500,
            body: "fake inference failure".to_string(),
        }
    }
}

#[async_trait]
impl SecureInference for FakeInference {
    async fn register_model(
        &self,
        _artifact: &Path,
        model_name: &str,
        _model_type: ModelType,
    ) -> Result<(), AivmError> {
        let mut registered = self.registered.lock().unwrap();
        if registered.iter().any(|m| m == model_name) {
            return Err(AivmError::Api {
                status: 409,
                body: format!("model {model_name} already registered"),
            });
        }
        registered.push(model_name.to_string());
        Ok(())
    }

    async fn encrypt_text(&self, text: &str) -> Result<EncryptedInput, AivmError> {
        if self.fail {
            return Err(self.service_error());
        }
        Ok(EncryptedInput::new(serde_json::json!({ "text_len": text.len() })))
    }

    async fn encrypt_tensor(&self, tensor: &ImageTensor) -> Result<EncryptedInput, AivmError> {
        if self.fail {
            return Err(self.service_error());
        }
        Ok(EncryptedInput::new(
            serde_json::json!({ "shape": tensor.shape() }),
        ))
    }

    async fn predict(
        &self,
        _input: &EncryptedInput,
        model_name: &str,
    ) -> Result<Vec<f32>, AivmError> {
        if self.fail {
            return Err(self.service_error());
        }
        self.outputs
            .lock()
            .unwrap()
            .get(model_name)
            .cloned()
            .ok_or_else(|| AivmError::Api {
                status: 404,
                body: format!("unknown model {model_name}"),
            })
    }
}

// ---------------------------------------------------------------------------
// Fake translator
// ---------------------------------------------------------------------------

/// Translator fake that records every input and returns a fixed reply.
pub struct FakeTranslator {
    reply: String,
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeTranslator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Inputs the handler passed in, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        self.calls.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(TranslateError::Api {
                status: 500,
                body: "fake translation failure".to_string(),
            });
        }
        Ok(self.reply.clone())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults and the given upload
/// directory.
pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        aivm_url: "http://localhost:50050".to_string(),
        translation_url: "http://localhost:8090".to_string(),
        upload_dir: upload_dir.to_path_buf(),
        diagnosis_model_path: "./models/bert_tiny_diagnosis.onnx".into(),
        image_model_path: "./models/lenet5_alzheimer.pth".into(),
    }
}

/// Build the full application router with all middleware layers, using
/// the given fake collaborators.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(
    inference: Arc<dyn SecureInference>,
    translator: Arc<dyn Translator>,
    upload_dir: &Path,
) -> Router {
    let state = AppState {
        config: Arc::new(test_config(upload_dir)),
        inference,
        translator,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3000".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::root::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Shorthand: app with default fakes, returning the fakes for later
/// assertions.
pub fn default_test_app(upload_dir: &Path) -> (Router, Arc<FakeInference>, Arc<FakeTranslator>) {
    let inference = Arc::new(FakeInference::new());
    let translator = Arc::new(FakeTranslator::new("vertaalde tekst"));
    let app = build_test_app(inference.clone(), translator.clone(), upload_dir);
    (app, inference, translator)
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a single-file multipart body.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    field: &str,
    filename: &str,
    bytes: &[u8],
) -> Response<Body> {
    const BOUNDARY: &str = "x-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::post(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A tiny valid PNG: 8x8 gray square, encoded in-memory.
pub fn sample_png() -> Vec<u8> {
    use image::{DynamicImage, GrayImage, Luma};
    use std::io::Cursor;

    let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(8, 8, Luma([128])));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Number of entries currently in a directory.
pub fn dir_entry_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|rd| rd.count()).unwrap_or(0)
}
