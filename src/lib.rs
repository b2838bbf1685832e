//! Employee MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing two
//! tools over a PostgreSQL `employees` table: `list_employees` and
//! `add_employee`.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Configuration, error handling, per-call database connections,
//!   the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **employees**: validation, row mapping, persistence and messages
//!   - **tools**: MCP tool definitions, router and registry
//!
//! # Example
//!
//! ```rust,no_run
//! use employee_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
