//! Employee tools and the result records they share.

pub mod add;
pub mod list;

pub use add::{AddEmployeeParams, AddEmployeeTool};
pub use list::{ListEmployeesParams, ListEmployeesTool};

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::domains::employees::{EmployeeError, Messages, Operation};

/// Error record returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    pub error: String,
}

/// Build a successful result carrying `payload` as JSON.
pub(crate) fn json_result(payload: &impl Serialize) -> CallToolResult {
    match Content::json(payload) {
        Ok(content) => CallToolResult::success(vec![content]),
        Err(e) => {
            warn!("Failed to encode tool result: {}", e.message);
            error_result("Failed to encode result".to_string())
        }
    }
}

/// Build an error result carrying an [`ErrorRecord`].
pub(crate) fn error_result(message: String) -> CallToolResult {
    let record = ErrorRecord { error: message };
    let content = match Content::json(&record) {
        Ok(content) => content,
        Err(_) => Content::text(record.error),
    };
    CallToolResult::error(vec![content])
}

/// Log an operation failure with its full cause and build the client-facing
/// error result.
pub(crate) fn failure_result(
    messages: &Messages,
    operation: Operation,
    err: &EmployeeError,
) -> CallToolResult {
    match err {
        EmployeeError::Validation(v) => warn!("{:?} rejected: {}", operation, v),
        other => warn!(error = ?other, "{:?} failed: {}", operation, other),
    }
    error_result(messages.failure(operation, err))
}
