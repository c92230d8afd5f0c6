//! # gcli
//!
//! Developer CLI for Go projects.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `gcli create <kind> <name>` | Generate a handler, service, repository or model (or `all`) |
//! | `gcli run [path] [-- args]` | Run the program and restart it on every source change |
//!
//! The watch-and-restart machinery lives in [`gcli_run`]; configuration in
//! [`gcli_core`].

pub mod cli;
pub mod commands;
pub mod error;
pub mod project;
pub mod templates;

pub use error::CliError;
