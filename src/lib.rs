//! Roster - interactive department, role, and employee tracking.
//!
//! A menu-driven terminal tool over a SQLite company database. The user
//! picks an action, the tool prompts for structured input, runs
//! parameterized queries through a pooled connection, and renders the
//! results as aligned tables.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Store-agnostic types: departments, roles, employees
//! - [`error`] - Error types for the crate
//! - [`store`] - Connection pooling, migrations, and the query gateway
//! - [`cli`] - Command definitions, prompt flows, and the menu loop

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod store;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
