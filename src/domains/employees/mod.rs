//! Employees domain module.
//!
//! Business rules for the `employees` table: validation, row mapping,
//! persistence and localized failure messages. Tool definitions in
//! `domains/tools/definitions/employees/` call into [`EmployeeService`].

mod error;
mod messages;
mod model;
mod service;
pub mod store;
mod validation;

pub use error::{EmployeeError, ValidationError};
pub use messages::{Locale, Messages, Operation};
pub use model::{Employee, NewEmployee};
pub use service::EmployeeService;
pub use store::{EmployeeStore, PgEmployeeStore};
pub use validation::{EmployeeDraft, HIRE_DATE_FORMAT, validate_limit, validate_new_employee};
