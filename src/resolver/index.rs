use std::fmt;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::config::ServerConfig;
use crate::remote::{RemoteError, RemoteSource};

pub const DEFAULT_ENTRY_NAME: &str = "Unknown";
pub const DEFAULT_ENTRY_DESCRIPTION: &str = "No description";

/// One record of the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: Option<String>,
    pub description: Option<String>,
    pub file: Option<String>,
}

impl IndexEntry {
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_ENTRY_NAME)
    }

    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_ENTRY_DESCRIPTION)
    }

    fn from_mapping(mapping: &Mapping) -> Self {
        Self {
            name: mapping.get("name").and_then(scalar_text),
            description: mapping.get("description").and_then(scalar_text),
            file: mapping.get("file").and_then(scalar_text),
        }
    }
}

/// Where a loaded index came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrigin {
    Local,
    Remote,
}

impl fmt::Display for IndexOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Remote => f.write_str("remote"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("cannot read index: {0}")]
    Read(#[from] std::io::Error),
    #[error("index is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("index is empty")]
    Empty,
    #[error("index is not a sequence of entries")]
    NotASequence,
    #[error("index entry {position} is not a mapping")]
    MalformedEntry { position: usize },
    #[error("remote index returned status {0}")]
    Status(u16),
    #[error("remote index unreachable: {0}")]
    Remote(#[from] RemoteError),
}

/// A usable index: a non-empty, ordered sequence of entries.
#[derive(Debug, Clone)]
pub struct Index {
    entries: Vec<IndexEntry>,
    origin: IndexOrigin,
}

impl Index {
    /// Parse index YAML. Anything other than a non-empty sequence of
    /// mappings is rejected.
    pub fn parse(text: &str, origin: IndexOrigin) -> Result<Self, IndexError> {
        let value: Value = serde_yaml::from_str(text)?;

        let items = match value {
            Value::Null => return Err(IndexError::Empty),
            Value::Sequence(items) => items,
            _ => return Err(IndexError::NotASequence),
        };

        if items.is_empty() {
            return Err(IndexError::Empty);
        }

        let entries = items
            .iter()
            .enumerate()
            .map(|(position, item)| match item {
                Value::Mapping(mapping) => Ok(IndexEntry::from_mapping(mapping)),
                _ => Err(IndexError::MalformedEntry { position }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries, origin })
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn origin(&self) -> IndexOrigin {
        self.origin
    }

    /// File reference of the first entry named exactly `name`.
    ///
    /// Only the first match is considered; a later duplicate is never
    /// consulted even if the first one has no `file`.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name.as_deref() == Some(name))
            .and_then(|entry| entry.file.as_deref())
            .filter(|file| !file.is_empty())
    }
}

/// Load the index, local copy first, then the remote repository.
///
/// Every failure along the way is logged and absorbed; `None` means neither
/// source produced a usable index. The remote is not contacted when the
/// local copy is usable.
pub async fn load_index<R: RemoteSource>(config: &ServerConfig, remote: &R) -> Option<Index> {
    let index_path = config.index_path();

    match load_local(&index_path) {
        Ok(Some(index)) => {
            tracing::info!(
                path = %index_path.display(),
                entries = index.entries().len(),
                "Loaded local index"
            );
            return Some(index);
        }
        Ok(None) => {
            tracing::debug!(path = %index_path.display(), "No local index");
        }
        Err(e) => {
            tracing::warn!(
                path = %index_path.display(),
                error = %e,
                "Local index unusable, falling back to remote"
            );
        }
    }

    let url = config.remote_index_url();
    match load_remote(remote, &url).await {
        Ok(index) => {
            tracing::info!(url = %url, entries = index.entries().len(), "Loaded remote index");
            Some(index)
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Remote index unavailable");
            None
        }
    }
}

fn load_local(path: &Path) -> Result<Option<Index>, IndexError> {
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)?;
    Index::parse(&text, IndexOrigin::Local).map(Some)
}

async fn load_remote<R: RemoteSource>(remote: &R, url: &str) -> Result<Index, IndexError> {
    let response = remote.get(url).await?;
    if response.status != 200 {
        return Err(IndexError::Status(response.status));
    }
    Index::parse(&response.body, IndexOrigin::Remote)
}

/// Textual form of a scalar YAML value; `null` and collections are absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
