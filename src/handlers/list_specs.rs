use crate::protocol::ToolResult;
use crate::remote::RemoteSource;
use crate::service::{SpecService, LIST_FAILURE_PREFIX};

/// Handle a `list_specs` tool call.
///
/// The lookup runs in its own task; if it panics the failure is reported
/// as text instead of tearing down the server loop.
pub async fn handle<R: RemoteSource>(service: &SpecService<R>) -> ToolResult {
    let service = service.clone();
    let task = tokio::spawn(async move { service.list_specs().await });

    match task.await {
        Ok(text) => ToolResult::text(text),
        Err(join_err) => {
            tracing::error!(error = %join_err, "list_specs task failed");
            ToolResult::text(format!("{LIST_FAILURE_PREFIX}: {join_err}"))
        }
    }
}
