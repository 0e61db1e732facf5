use std::fmt::Write as _;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::remote::{HttpRemote, RemoteSource};
use crate::resolver::{fetch_document, load_index, FetchError, Index};

pub const NO_SPECS_FOUND: &str = "No specifications found (checked local and remote).";
pub const INDEX_UNAVAILABLE: &str = "Error: Could not load index file (local or remote).";
pub const LISTING_HEADER: &str = "Available Specifications:";

/// Prefix for failures of `list_specs` not covered by a specific message.
pub const LIST_FAILURE_PREFIX: &str = "Error reading index";
/// Prefix for failures of `fetch_spec` not covered by a specific message.
pub const FETCH_FAILURE_PREFIX: &str = "Error fetching spec";

/// The two lookup operations.
///
/// Stateless: every call reloads the index. Cloning is cheap and clones
/// share the configuration and the remote client.
#[derive(Debug, Clone)]
pub struct SpecService<R = HttpRemote> {
    config: Arc<ServerConfig>,
    remote: R,
}

impl SpecService<HttpRemote> {
    /// Service backed by a real HTTP client built from `config`.
    pub fn from_config(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let remote = HttpRemote::new(config.http_timeout)?;
        Ok(Self::new(config, remote))
    }
}

impl<R: RemoteSource> SpecService<R> {
    pub fn new(config: ServerConfig, remote: R) -> Self {
        Self {
            config: Arc::new(config),
            remote,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// List every entry of the index as `- {name}: {description}`.
    pub async fn list_specs(&self) -> String {
        match load_index(&self.config, &self.remote).await {
            Some(index) => render_listing(&index),
            None => NO_SPECS_FOUND.to_string(),
        }
    }

    /// Raw text of the spec named `name`, or an error message.
    pub async fn fetch_spec(&self, name: &str) -> String {
        let Some(index) = load_index(&self.config, &self.remote).await else {
            return INDEX_UNAVAILABLE.to_string();
        };

        let Some(file_ref) = index.resolve(name) else {
            tracing::info!(name, "Spec not found in index");
            return format!("Error: Spec '{name}' not found in index.");
        };

        match fetch_document(&self.config, &self.remote, file_ref).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(name, file = file_ref, error = %e, "Spec fetch failed");
                render_fetch_error(&e)
            }
        }
    }
}

/// Header line followed by one line per entry, in index order.
pub fn render_listing(index: &Index) -> String {
    let mut out = String::from(LISTING_HEADER);
    out.push('\n');
    for entry in index.entries() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "- {}: {}",
            entry.name_or_default(),
            entry.description_or_default()
        );
    }
    out
}

fn render_fetch_error(err: &FetchError) -> String {
    match err {
        FetchError::NotFound { path, url } => format!(
            "Error: Spec file '{path}' not found locally or in public repository (404).\nURL: {url}"
        ),
        FetchError::Status { status } => {
            format!("Error: Failed to fetch spec. Status code: {status}")
        }
        FetchError::Transport(e) => format!("{FETCH_FAILURE_PREFIX}: {e}"),
    }
}
