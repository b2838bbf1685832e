//! Employee service - the two operations exposed as tools.

use std::sync::Arc;

use chrono::Local;
use tracing::{info, instrument};

use super::error::EmployeeError;
use super::messages::Messages;
use super::model::Employee;
use super::store::{EmployeeStore, PgEmployeeStore};
use super::validation::{EmployeeDraft, validate_limit, validate_new_employee};
use crate::core::config::Config;

/// Service for listing and adding employees.
///
/// Holds no per-call state; concurrent calls share only the store handle.
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
    messages: Messages,
}

impl EmployeeService {
    /// Create a service over an arbitrary store.
    pub fn new(store: Arc<dyn EmployeeStore>, messages: Messages) -> Self {
        Self { store, messages }
    }

    /// Create a PostgreSQL-backed service from the server configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(PgEmployeeStore::new(config.database.clone())),
            Messages::new(config.messages.locale),
        )
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// List up to `limit` employees ordered by id.
    #[instrument(skip(self))]
    pub async fn list_employees(&self, limit: i64) -> Result<Vec<Employee>, EmployeeError> {
        let limit = validate_limit(limit)?;
        let employees = self.store.list(limit).await?;
        info!("Listed {} employees", employees.len());
        Ok(employees)
    }

    /// Validate and insert a new employee, returning the stored record.
    #[instrument(skip_all, fields(name = %draft.name))]
    pub async fn add_employee(&self, draft: EmployeeDraft<'_>) -> Result<Employee, EmployeeError> {
        let new_employee = validate_new_employee(&draft, Local::now().date_naive())?;
        let employee = self.store.insert(&new_employee).await?;
        info!("Added employee {} with id {}", employee.name, employee.id);
        Ok(employee)
    }
}
