// ABOUTME: Library root for ecsdeploy - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod aws;
pub mod config;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod handler;
pub mod output;
pub mod types;
