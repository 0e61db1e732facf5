use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public repository the documents are mirrored from.
pub const DEFAULT_REPO_BASE_URL: &str =
    "https://raw.githubusercontent.com/Azure/PMAgent-onboarding/main";

/// Subpath under the repository base that holds the index and documents.
pub const REMOTE_DOCS_SUBPATH: &str = "spec/docs";

/// File name of the index inside the documents directory.
pub const INDEX_FILE_NAME: &str = "index.yml";

/// Server configuration.
///
/// Immutable once built; every lookup derives its local paths and remote
/// URLs from these values.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub docs_dir: PathBuf,
    pub repo_base_url: String,
    /// Per-request timeout for outbound HTTP. `None` leaves the client default.
    pub http_timeout: Option<Duration>,
}

impl ServerConfig {
    pub fn new(docs_dir: impl Into<PathBuf>, repo_base_url: impl Into<String>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            repo_base_url: trim_base_url(repo_base_url.into()),
            http_timeout: None,
        }
    }

    /// Load configuration from environment.
    ///
    /// - `SPEC_DOCS_DIR` (optional, default `<crate dir>/docs`) — local documents directory
    /// - `SPEC_REPO_BASE_URL` (optional) — remote repository base URL
    /// - `SPEC_HTTP_TIMEOUT_SECS` (optional, default none) — max seconds per HTTP request
    pub fn from_env() -> Result<Self, String> {
        let docs_dir = std::env::var("SPEC_DOCS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_docs_dir());

        let repo_base_url = std::env::var("SPEC_REPO_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_REPO_BASE_URL.to_string());
        if repo_base_url.trim().is_empty() {
            return Err("SPEC_REPO_BASE_URL must not be empty".to_string());
        }

        let http_timeout = match std::env::var("SPEC_HTTP_TIMEOUT_SECS") {
            Ok(val) => {
                let secs = val
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| "SPEC_HTTP_TIMEOUT_SECS must be a positive integer".to_string())?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            docs_dir,
            repo_base_url: trim_base_url(repo_base_url),
            http_timeout,
        })
    }

    pub fn index_path(&self) -> PathBuf {
        self.docs_dir.join(INDEX_FILE_NAME)
    }

    pub fn remote_index_url(&self) -> String {
        self.remote_document_url(INDEX_FILE_NAME)
    }

    /// `normalized` must already have gone through [`crate::resolver::normalize_file_ref`].
    pub fn local_document_path(&self, normalized: &str) -> PathBuf {
        self.docs_dir.join(Path::new(normalized))
    }

    pub fn remote_document_url(&self, normalized: &str) -> String {
        format!("{}/{REMOTE_DOCS_SUBPATH}/{normalized}", self.repo_base_url)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(default_docs_dir(), DEFAULT_REPO_BASE_URL)
    }
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("docs")
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_urls_are_built_under_spec_docs() {
        let config = ServerConfig::new("/srv/docs", "https://example.test/repo/");
        assert_eq!(
            config.remote_index_url(),
            "https://example.test/repo/spec/docs/index.yml"
        );
        assert_eq!(
            config.remote_document_url("guides/setup.md"),
            "https://example.test/repo/spec/docs/guides/setup.md"
        );
    }

    #[test]
    fn local_paths_are_joined_to_docs_dir() {
        let config = ServerConfig::new("/srv/docs", DEFAULT_REPO_BASE_URL);
        assert_eq!(config.index_path(), PathBuf::from("/srv/docs/index.yml"));
        assert_eq!(
            config.local_document_path("a/b.md"),
            PathBuf::from("/srv/docs/a/b.md")
        );
    }
}
