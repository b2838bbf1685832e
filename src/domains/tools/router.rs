//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for the STDIO/TCP transports by
//! delegating to the tool definitions themselves. Each tool knows how to
//! create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{AddEmployeeTool, ListEmployeesTool};
use crate::domains::employees::EmployeeService;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(service: Arc<EmployeeService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListEmployeesTool::create_route(service.clone()))
        .with_route(AddEmployeeTool::create_route(service))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::employees::store::memory::MemoryStore;
    use crate::domains::employees::{Locale, Messages};

    struct TestServer {}

    fn test_service() -> Arc<EmployeeService> {
        Arc::new(EmployeeService::new(
            Arc::new(MemoryStore::new()),
            Messages::new(Locale::Es),
        ))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_service());
        let tools = router.list_all();
        assert_eq!(tools.len(), 2);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list_employees"));
        assert!(names.contains(&"add_employee"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let service = test_service();
        let registry = ToolRegistry::new(service.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(service);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
