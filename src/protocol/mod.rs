pub mod request;
pub mod response;

pub use request::{ClientInfo, FetchSpecParams, InitializeParams, JsonRpcRequest, RpcId, ToolCallParams};
pub use response::{JsonRpcError, JsonRpcResponse, ToolResult, ToolResultContent};
