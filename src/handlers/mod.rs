//! MCP tool handlers for the Gantt server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each tool family is in a separate file.

pub mod gantt;
pub mod list;
pub mod projects;
pub mod tasks;
