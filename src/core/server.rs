//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the employee tools.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `http_handler()` method (called via ToolRegistry for HTTP transport)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::{
    employees::EmployeeService,
    tools::{ToolRegistry, build_tool_router},
};

const INSTRUCTIONS: &str = "Company database server. Use list_employees to read employee records \
     and add_employee to insert a new one.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap; every clone shares the same employee service.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service behind both employee tools.
    employee_service: Arc<EmployeeService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server backed by PostgreSQL.
    pub fn new(config: Config) -> Self {
        let service = EmployeeService::from_config(&config);
        Self::with_service(config, Arc::new(service))
    }

    /// Create a server over an existing employee service.
    pub fn with_service(config: Config, employee_service: Arc<EmployeeService>) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(employee_service.clone()),
            config: Arc::new(config),
            employee_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Instructions sent to clients on initialization.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Operation failures come back as `Ok` with `isError: true`; only
    /// dispatch problems (unknown tool, malformed arguments) are `Err`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> super::Result<serde_json::Value> {
        let registry = ToolRegistry::new(self.employee_service.clone());
        Ok(registry.call_tool(name, arguments).await?)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::domains::employees::store::memory::MemoryStore;
    use crate::domains::employees::{Locale, Messages};

    fn test_server() -> McpServer {
        let service = EmployeeService::new(
            Arc::new(MemoryStore::new()),
            Messages::new(Locale::En),
        );
        McpServer::with_service(Config::default(), Arc::new(service))
    }

    #[test]
    fn test_info_advertises_tools_only() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "company_db_server");
    }

    #[test]
    fn test_list_tools_json() {
        let tools = test_server().list_tools();
        assert_eq!(tools.len(), 2);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[tokio::test]
    async fn test_call_tool_add_then_list() {
        let server = test_server();
        let added = server
            .call_tool(
                "add_employee",
                serde_json::json!({
                    "name": "Alice",
                    "position": "Engineer",
                    "department": "R&D",
                    "salary": 50000.0,
                    "hire_date": "2024-01-15"
                }),
            )
            .await
            .unwrap();
        assert_eq!(added["isError"], false);

        let listed = server
            .call_tool("list_employees", serde_json::json!({ "limit": 10 }))
            .await
            .unwrap();
        let text = listed["content"][0]["text"].as_str().unwrap();
        let records: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(records[0]["name"], "Alice");
        assert_eq!(records[0]["hire_date"], "2024-01-15");
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let err = test_server()
            .call_tool("missing", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Tool(_)));
    }
}
