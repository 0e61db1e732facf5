use crate::protocol::{FetchSpecParams, ToolResult};
use crate::remote::RemoteSource;
use crate::service::{SpecService, FETCH_FAILURE_PREFIX};

/// Handle a `fetch_spec` tool call.
///
/// Document text is returned exactly as fetched, with no wrapping.
pub async fn handle<R: RemoteSource>(params: FetchSpecParams, service: &SpecService<R>) -> ToolResult {
    let service = service.clone();
    let task = tokio::spawn(async move { service.fetch_spec(&params.name).await });

    match task.await {
        Ok(text) => ToolResult::text(text),
        Err(join_err) => {
            tracing::error!(error = %join_err, "fetch_spec task failed");
            ToolResult::text(format!("{FETCH_FAILURE_PREFIX}: {join_err}"))
        }
    }
}
