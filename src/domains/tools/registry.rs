//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls
//! - Tool metadata for listing

use std::sync::Arc;
use tracing::warn;

use rmcp::model::Tool;

use super::ToolError;
use super::definitions::{AddEmployeeTool, ListEmployeesTool};
use crate::domains::employees::EmployeeService;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    service: Arc<EmployeeService>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(service: Arc<EmployeeService>) -> Self {
        Self { service }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![ListEmployeesTool::NAME, AddEmployeeTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![ListEmployeesTool::to_tool(), AddEmployeeTool::to_tool()]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            ListEmployeesTool::NAME => {
                ListEmployeesTool::http_handler(arguments, self.service.clone()).await
            }
            AddEmployeeTool::NAME => {
                AddEmployeeTool::http_handler(arguments, self.service.clone()).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
