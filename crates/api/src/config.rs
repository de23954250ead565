use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development
/// against an AIVM devnet and a local translation service. In
/// production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the AIVM inference node.
    pub aivm_url: String,
    /// Base URL of the translation service.
    pub translation_url: String,
    /// Directory for request-scoped image uploads.
    pub upload_dir: PathBuf,
    /// Path to the text-symptom classifier artifact.
    pub diagnosis_model_path: PathBuf,
    /// Path to the dementia image classifier artifact.
    pub image_model_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                             |
    /// |------------------------|-------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                           |
    /// | `PORT`                 | `8080`                              |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`             |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                |
    /// | `AIVM_URL`             | `http://localhost:50050`            |
    /// | `TRANSLATION_URL`      | `http://localhost:8090`             |
    /// | `UPLOAD_DIR`           | `./uploads`                         |
    /// | `DIAGNOSIS_MODEL_PATH` | `./models/bert_tiny_diagnosis.onnx` |
    /// | `IMAGE_MODEL_PATH`     | `./models/lenet5_alzheimer.pth`     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let aivm_url =
            std::env::var("AIVM_URL").unwrap_or_else(|_| "http://localhost:50050".into());

        let translation_url =
            std::env::var("TRANSLATION_URL").unwrap_or_else(|_| "http://localhost:8090".into());

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".into()));

        let diagnosis_model_path = PathBuf::from(
            std::env::var("DIAGNOSIS_MODEL_PATH")
                .unwrap_or_else(|_| "./models/bert_tiny_diagnosis.onnx".into()),
        );

        let image_model_path = PathBuf::from(
            std::env::var("IMAGE_MODEL_PATH")
                .unwrap_or_else(|_| "./models/lenet5_alzheimer.pth".into()),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            aivm_url,
            translation_url,
            upload_dir,
            diagnosis_model_path,
            image_model_path,
        }
    }
}
