//! Employee persistence.
//!
//! [`EmployeeStore`] is the seam between the operations and the database.
//! [`PgEmployeeStore`] opens one connection per call and lets it drop at the
//! end of the call, whatever the outcome.

use async_trait::async_trait;
use tracing::debug;

use super::error::EmployeeError;
use super::model::{Employee, NewEmployee};
use crate::core::config::DatabaseConfig;
use crate::core::database;

const LIST_EMPLOYEES_SQL: &str = "SELECT id::int8 AS id, name, position, department, \
     salary::float8 AS salary, hire_date::date AS hire_date \
     FROM employees ORDER BY id LIMIT $1";

const INSERT_EMPLOYEE_SQL: &str = "INSERT INTO employees (name, position, department, salary, hire_date) \
     VALUES ($1, $2, $3, $4::float8, $5) \
     RETURNING id::int8 AS id, name, position, department, \
     salary::float8 AS salary, hire_date::date AS hire_date";

/// Storage backend for employees.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Return up to `limit` employees ordered by id.
    async fn list(&self, limit: i64) -> Result<Vec<Employee>, EmployeeError>;

    /// Insert one employee and return the stored row.
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, EmployeeError>;
}

/// PostgreSQL-backed store using a fresh connection per call.
pub struct PgEmployeeStore {
    config: DatabaseConfig,
}

impl PgEmployeeStore {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn list(&self, limit: i64) -> Result<Vec<Employee>, EmployeeError> {
        let session = database::connect(&self.config).await?;
        let rows = session.query(LIST_EMPLOYEES_SQL, &[&limit]).await?;
        debug!("Fetched {} employee rows", rows.len());

        let employees = rows
            .iter()
            .map(Employee::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(employees)
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, EmployeeError> {
        let session = database::connect(&self.config).await?;
        let row = session
            .query_one(
                INSERT_EMPLOYEE_SQL,
                &[
                    &employee.name,
                    &employee.position,
                    &employee.department,
                    &employee.salary,
                    &employee.hire_date,
                ],
            )
            .await?;
        Ok(Employee::from_row(&row)?)
    }
}
