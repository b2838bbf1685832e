//! List employees tool definition.
//!
//! Returns up to `limit` employee records ordered by id.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{failure_result, json_result};
use crate::domains::employees::{EmployeeService, Operation};
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list employees tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListEmployeesParams {
    /// Maximum number of employees to return (must be at least 1).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    5
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List employees tool - reads a bounded page of the employees table.
pub struct ListEmployeesTool;

impl ListEmployeesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_employees";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List employees with a limit on the number of records returned. \
         Each record has id, name, position, department, salary and hire_date (YYYY-MM-DD).";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(limit = params.limit))]
    pub async fn execute(params: &ListEmployeesParams, service: &EmployeeService) -> CallToolResult {
        info!("List employees tool called with limit {}", params.limit);

        match service.list_employees(params.limit).await {
            Ok(employees) => json_result(&employees),
            Err(e) => failure_result(service.messages(), Operation::ListEmployees, &e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        service: Arc<EmployeeService>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: ListEmployeesParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(&params, &service).await;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListEmployeesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp-driven transports.
    pub fn create_route<S>(service: Arc<EmployeeService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let service = service.clone();
            async move {
                let params: ListEmployeesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &service).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::employees::store::memory::MemoryStore;
    use crate::domains::employees::{EmployeeDraft, Locale, Messages};
    use crate::domains::tools::definitions::employees::test_support::result_json;

    async fn seeded_service(count: usize) -> Arc<EmployeeService> {
        let store = Arc::new(MemoryStore::new());
        let service = Arc::new(EmployeeService::new(store, Messages::new(Locale::Es)));
        for i in 0..count {
            let name = format!("Employee {}", i);
            service
                .add_employee(EmployeeDraft {
                    name: &name,
                    position: "Analyst",
                    department: "Finance",
                    salary: 3000.5,
                    hire_date: Some("2023-03-01"),
                })
                .await
                .unwrap();
        }
        service
    }

    #[tokio::test]
    async fn test_list_returns_typed_records() {
        let service = seeded_service(3).await;
        let result = ListEmployeesTool::execute(&ListEmployeesParams { limit: 2 }, &service).await;
        assert!(!result.is_error.unwrap_or(false));

        let records = result_json(&result);
        let records = records.as_array().unwrap();
        assert_eq!(records.len(), 2);
        for record in records {
            for field in ["id", "name", "position", "department", "salary", "hire_date"] {
                assert!(record.get(field).is_some(), "missing {}", field);
            }
            assert!(record["salary"].is_f64());
            assert_eq!(record["hire_date"], "2023-03-01");
        }
    }

    #[tokio::test]
    async fn test_list_zero_limit_is_error_record() {
        let service = seeded_service(1).await;
        let result = ListEmployeesTool::execute(&ListEmployeesParams { limit: 0 }, &service).await;
        assert!(result.is_error.unwrap_or(false));

        let record = result_json(&result);
        assert!(record["error"].as_str().unwrap().contains("límite"));
    }

    #[tokio::test]
    async fn test_list_connection_failure_is_error_record() {
        let service = Arc::new(EmployeeService::new(
            Arc::new(MemoryStore::offline()),
            Messages::new(Locale::Es),
        ));
        let result = ListEmployeesTool::execute(&ListEmployeesParams { limit: 5 }, &service).await;
        assert!(result.is_error.unwrap_or(false));

        let record = result_json(&result);
        assert!(
            record["error"]
                .as_str()
                .unwrap()
                .starts_with("Error al obtener empleados")
        );
    }

    #[tokio::test]
    async fn test_list_missing_db_host_is_error_record() {
        use crate::core::config::{DatabaseConfig, ENV_TEST_LOCK};
        use crate::core::database::DB_HOST;
        use crate::domains::employees::PgEmployeeStore;

        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved = std::env::var(DB_HOST).ok();
        unsafe {
            std::env::remove_var(DB_HOST);
        }

        let service = Arc::new(EmployeeService::new(
            Arc::new(PgEmployeeStore::new(DatabaseConfig::default())),
            Messages::new(Locale::Es),
        ));
        let result = ListEmployeesTool::execute(&ListEmployeesParams { limit: 5 }, &service).await;

        if let Some(host) = saved {
            unsafe {
                std::env::set_var(DB_HOST, host);
            }
        }

        assert!(result.is_error.unwrap_or(false));
        let record = result_json(&result);
        assert!(
            record["error"]
                .as_str()
                .unwrap()
                .starts_with("Error al obtener empleados")
        );
    }

    #[tokio::test]
    async fn test_list_http_handler_default_limit() {
        let service = seeded_service(7).await;
        let value = ListEmployeesTool::http_handler(serde_json::json!({}), service)
            .await
            .unwrap();
        assert_eq!(value["isError"], false);

        let text = value["content"][0]["text"].as_str().unwrap();
        let records: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(records.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_list_http_handler_bad_limit_type() {
        let service = seeded_service(0).await;
        let result =
            ListEmployeesTool::http_handler(serde_json::json!({ "limit": "many" }), service).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
