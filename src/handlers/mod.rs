pub mod fetch_spec;
pub mod list_specs;

use serde_json::Value;

use crate::protocol::{
    FetchSpecParams, InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ToolCallParams, ToolResult,
};
use crate::remote::RemoteSource;
use crate::schema::validate_value;
use crate::service::SpecService;

pub const LIST_SPECS_TOOL: &str = "list_specs";
pub const FETCH_SPEC_TOOL: &str = "fetch_spec";

/// Input schema advertised for `list_specs`.
pub fn list_specs_input_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {}
    })
}

/// Input schema advertised for `fetch_spec`.
pub fn fetch_spec_input_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {
                "type": "string",
                "description": "The name of the spec to fetch (as listed in the index)"
            }
        }
    })
}

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch<R: RemoteSource>(
    req: &JsonRpcRequest,
    service: &SpecService<R>,
) -> Option<JsonRpcResponse> {
    tracing::debug!(method = %req.method, "Received request");

    match req.method.as_str() {
        "initialize" => {
            if let Some(params) = req
                .params
                .as_ref()
                .and_then(|v| serde_json::from_value::<InitializeParams>(v.clone()).ok())
            {
                let client = params.client_info.as_ref();
                tracing::info!(
                    protocol_version = params.protocol_version.as_deref().unwrap_or("unknown"),
                    client = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
                    client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
                    "Client initializing"
                );
            }

            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "spec-fetcher-mcp",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => {
            let result = serde_json::json!({
                "tools": [
                    {
                        "name": LIST_SPECS_TOOL,
                        "description": "List all available specifications from the index, with their descriptions",
                        "inputSchema": list_specs_input_schema()
                    },
                    {
                        "name": FETCH_SPEC_TOOL,
                        "description": "Fetch the content of a specification by its name. Tries the local docs directory first, then falls back to the public repository",
                        "inputSchema": fetch_spec_input_schema()
                    }
                ]
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let tool_result = dispatch_tool_call(&params, service).await;
            match serde_json::to_value(&tool_result) {
                Ok(result_json) => Some(JsonRpcResponse::success(req.id.clone(), result_json)),
                Err(e) => {
                    tracing::error!(error = %e, "Tool result serialization failed");
                    Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::internal_error("Tool result serialization failed"),
                    ))
                }
            }
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

async fn dispatch_tool_call<R: RemoteSource>(
    params: &ToolCallParams,
    service: &SpecService<R>,
) -> ToolResult {
    let arguments = params
        .arguments
        .clone()
        .unwrap_or_else(|| Value::Object(Default::default()));

    match params.name.as_str() {
        LIST_SPECS_TOOL => {
            if let Err(e) = validate_value(&list_specs_input_schema(), &arguments) {
                return ToolResult::error(format!("Invalid arguments for {LIST_SPECS_TOOL}: {e}"));
            }
            list_specs::handle(service).await
        }

        FETCH_SPEC_TOOL => {
            if let Err(e) = validate_value(&fetch_spec_input_schema(), &arguments) {
                return ToolResult::error(format!("Invalid arguments for {FETCH_SPEC_TOOL}: {e}"));
            }
            let fetch_params: FetchSpecParams = match serde_json::from_value(arguments) {
                Ok(p) => p,
                Err(e) => {
                    return ToolResult::error(format!(
                        "Invalid arguments for {FETCH_SPEC_TOOL}: {e}"
                    ));
                }
            };
            fetch_spec::handle(fetch_params, service).await
        }

        _ => ToolResult::error(format!("Unknown tool: {}", params.name)),
    }
}
