//! Domains module containing business logic organized by bounded contexts.
//!
//! - **employees**: validation, persistence and messages for employee records
//! - **tools**: the MCP tools wrapping the employee operations

pub mod employees;
pub mod tools;
