//! Request-scoped storage for uploaded images.
//!
//! Each upload lands in its own `<upload_dir>/<uuid-v4>/` directory so
//! two simultaneous uploads of identically-named files can never race
//! on the same path. The directory must not outlive the request:
//! handlers call [`ScopedUpload::remove`] unconditionally once
//! inference has run, whatever the outcome.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// An uploaded file stored under a per-request unique directory.
#[derive(Debug)]
pub struct ScopedUpload {
    dir: PathBuf,
    path: PathBuf,
}

impl ScopedUpload {
    /// Path of the stored file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the upload's directory and everything in it.
    ///
    /// Failure to clean up is logged but not surfaced: the response to
    /// the client does not depend on it.
    pub async fn remove(self) {
        if let Err(err) = tokio::fs::remove_dir_all(&self.dir).await {
            tracing::warn!(dir = %self.dir.display(), error = %err, "Failed to remove upload directory");
        }
    }
}

/// Write `bytes` to a fresh request-scoped directory, keeping the
/// client-supplied filename.
///
/// Any path components in the filename are stripped so the file cannot
/// escape its directory.
pub async fn store(
    upload_dir: &Path,
    filename: &str,
    bytes: &[u8],
) -> Result<ScopedUpload, std::io::Error> {
    let dir = upload_dir.join(Uuid::new_v4().to_string());
    tokio::fs::create_dir_all(&dir).await?;

    let safe_name = Path::new(filename)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload.bin".to_string());

    let path = dir.join(safe_name);
    if let Err(err) = tokio::fs::write(&path, bytes).await {
        // Don't leave an empty per-request directory behind.
        let _ = tokio::fs::remove_dir_all(&dir).await;
        return Err(err);
    }

    Ok(ScopedUpload { dir, path })
}
