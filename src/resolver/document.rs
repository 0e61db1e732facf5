use crate::config::ServerConfig;
use crate::remote::{RemoteError, RemoteSource};

use super::path::normalize_file_ref;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Missing locally and the repository answered 404.
    #[error("spec file '{path}' not found locally or remotely: {url}")]
    NotFound { path: String, url: String },
    #[error("unexpected status code {status}")]
    Status { status: u16 },
    #[error(transparent)]
    Transport(#[from] RemoteError),
}

/// Fetch the raw text of a document, local copy first.
///
/// A local file that exists but cannot be read falls through to the
/// remote repository. The returned text is passed through unmodified.
pub async fn fetch_document<R: RemoteSource>(
    config: &ServerConfig,
    remote: &R,
    file_ref: &str,
) -> Result<String, FetchError> {
    let normalized = normalize_file_ref(file_ref);

    let local_path = config.local_document_path(&normalized);
    if local_path.exists() {
        match std::fs::read_to_string(&local_path) {
            Ok(text) => {
                tracing::debug!(path = %local_path.display(), "Serving local document");
                return Ok(text);
            }
            Err(e) => {
                tracing::warn!(
                    path = %local_path.display(),
                    error = %e,
                    "Local document unreadable, falling back to remote"
                );
            }
        }
    }

    let url = config.remote_document_url(&normalized);
    let response = remote.get(&url).await?;

    match response.status {
        200 => Ok(response.body),
        404 => Err(FetchError::NotFound {
            path: normalized,
            url,
        }),
        status => Err(FetchError::Status { status }),
    }
}
