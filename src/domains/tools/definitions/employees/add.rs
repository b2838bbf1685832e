//! Add employee tool definition.
//!
//! Validates the input, inserts one row and echoes the stored record.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{failure_result, json_result};
use crate::domains::employees::{Employee, EmployeeDraft, EmployeeService, Operation};
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the add employee tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddEmployeeParams {
    /// Full name of the employee (must not be blank).
    pub name: String,

    /// Job title.
    pub position: String,

    /// Department the employee belongs to.
    pub department: String,

    /// Salary, must be greater than zero.
    pub salary: f64,

    /// Hire date as YYYY-MM-DD. Defaults to today.
    #[serde(default)]
    pub hire_date: Option<String>,
}

impl AddEmployeeParams {
    fn draft(&self) -> EmployeeDraft<'_> {
        EmployeeDraft {
            name: &self.name,
            position: &self.position,
            department: &self.department,
            salary: self.salary,
            hire_date: self.hire_date.as_deref(),
        }
    }
}

// ============================================================================
// Structured Output Types
// ============================================================================

/// Success record for an inserted employee.
#[derive(Debug, Clone, Serialize)]
pub struct AddEmployeeOutput {
    pub success: bool,
    pub employee: Employee,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Add employee tool - inserts a new row into the employees table.
pub struct AddEmployeeTool;

impl AddEmployeeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_employee";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a new employee to the database. \
         Name must not be blank, salary must be positive and hire_date, when given, must be YYYY-MM-DD.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn execute(params: &AddEmployeeParams, service: &EmployeeService) -> CallToolResult {
        info!("Add employee tool called");

        match service.add_employee(params.draft()).await {
            Ok(employee) => json_result(&AddEmployeeOutput {
                success: true,
                employee,
            }),
            Err(e) => failure_result(service.messages(), Operation::AddEmployee, &e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        service: Arc<EmployeeService>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: AddEmployeeParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<AddEmployeeParams>(),
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
                let params: AddEmployeeParams =
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
    use crate::domains::employees::{Locale, Messages};
    use crate::domains::tools::definitions::employees::test_support::result_json;

    fn service_with(store: Arc<MemoryStore>, locale: Locale) -> Arc<EmployeeService> {
        Arc::new(EmployeeService::new(store, Messages::new(locale)))
    }

    fn params(name: &str, salary: f64, hire_date: Option<&str>) -> AddEmployeeParams {
        AddEmployeeParams {
            name: name.to_string(),
            position: "Engineer".to_string(),
            department: "R&D".to_string(),
            salary,
            hire_date: hire_date.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_add_echoes_trimmed_record() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone(), Locale::Es);

        let result = AddEmployeeTool::execute(
            &params("  Alice  ", 50000.0, Some("2024-01-15")),
            &service,
        )
        .await;
        assert!(!result.is_error.unwrap_or(false));

        let payload = result_json(&result);
        assert_eq!(payload["success"], true);
        assert_eq!(payload["employee"]["id"], 1);
        assert_eq!(payload["employee"]["name"], "Alice");
        assert_eq!(payload["employee"]["hire_date"], "2024-01-15");
        assert_eq!(payload["employee"]["salary"].as_f64(), Some(50000.0));
        assert_eq!(store.rows()[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_add_blank_name_is_error_record() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone(), Locale::Es);

        let result = AddEmployeeTool::execute(&params("   ", 100.0, None), &service).await;
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(
            result_json(&result)["error"],
            "El nombre del empleado no puede estar vacío."
        );
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn test_add_non_positive_salary_is_error_record() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone(), Locale::En);

        for salary in [0.0, -5.0] {
            let result = AddEmployeeTool::execute(&params("Bob", salary, None), &service).await;
            assert!(result.is_error.unwrap_or(false));
            assert_eq!(
                result_json(&result)["error"],
                "The salary must be greater than zero."
            );
        }
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn test_add_wrong_date_format_is_error_record() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone(), Locale::En);

        let result =
            AddEmployeeTool::execute(&params("Carol", 10.0, Some("15-01-2024")), &service).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(
            result_json(&result)["error"]
                .as_str()
                .unwrap()
                .contains("YYYY-MM-DD")
        );
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_add_http_handler() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store, Locale::Es);

        let value = AddEmployeeTool::http_handler(
            serde_json::json!({
                "name": "Dana",
                "position": "Designer",
                "department": "Product",
                "salary": 4200
            }),
            service,
        )
        .await
        .unwrap();
        assert_eq!(value["isError"], false);
    }

    #[tokio::test]
    async fn test_add_http_handler_missing_param() {
        let service = service_with(Arc::new(MemoryStore::new()), Locale::Es);
        let result =
            AddEmployeeTool::http_handler(serde_json::json!({ "name": "Dana" }), service).await;
        assert!(result.is_err());
    }
}
