//! Movie console - an interactive console for a movie, people and cast database.
//!
//! This library exposes the core modules for use by the binary and integration tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod logging;
