//! Command implementations for the `gcli` CLI.

/// Scaffolding: `gcli create <kind> <name>`.
///
/// Renders the embedded handler/service/repository/model templates into new
/// source files. Existing files are never overwritten.
pub mod create;

/// Live restart: `gcli run [path] [-- args...]`.
///
/// Resolves the entry-point directory, then hands over to a
/// [`gcli_run::RunSession`] until SIGINT/SIGTERM.
pub mod run;
