//! Trigen CLI library.
//!
//! This library provides the core functionality for the trigen command-line
//! interface: argument parsing, configuration management, report rendering,
//! the interactive form session, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod output;
pub mod report;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use report::Report;
pub use session::Session;
