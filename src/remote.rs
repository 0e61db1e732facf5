use std::future::Future;
use std::time::Duration;

/// Status and body of a completed HTTP GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: String,
}

impl RemoteResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Transport-level failure: DNS, connect, TLS, timeout, or an unreadable body.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    pub url: String,
    pub message: String,
}

impl RemoteError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Read-only access to the public repository.
///
/// One call is one GET; implementations must not retry or cache.
pub trait RemoteSource: Clone + Send + Sync + 'static {
    fn get(&self, url: &str) -> impl Future<Output = Result<RemoteResponse, RemoteError>> + Send;
}

/// [`RemoteSource`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
}

impl HttpRemote {
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl RemoteSource for HttpRemote {
    fn get(&self, url: &str) -> impl Future<Output = Result<RemoteResponse, RemoteError>> + Send {
        let client = self.client.clone();
        let url = url.to_string();

        async move {
            tracing::debug!(url = %url, "remote GET");
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| RemoteError::new(&url, e.to_string()))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| RemoteError::new(&url, e.to_string()))?;

            tracing::debug!(url = %url, status, bytes = body.len(), "remote response");
            Ok(RemoteResponse { status, body })
        }
    }
}
