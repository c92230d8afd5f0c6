use std::io;

use gcli_run::RunError;

#[derive(Debug)]
pub enum CliError {
	/// Bad or missing command-line input; nothing was touched.
	Usage(String),
	Io(io::Error),
	Prompt(dialoguer::Error),
	Template(String),
	Run(RunError),
}

impl std::fmt::Display for CliError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			CliError::Usage(msg) => write!(f, "{}", msg),
			CliError::Io(e) => write!(f, "io error: {}", e),
			CliError::Prompt(e) => write!(f, "prompt failed: {}", e),
			CliError::Template(msg) => write!(f, "template error: {}", msg),
			CliError::Run(e) => write!(f, "{}", e),
		}
	}
}

impl std::error::Error for CliError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			CliError::Io(e) => Some(e),
			CliError::Prompt(e) => Some(e),
			CliError::Run(e) => Some(e),
			CliError::Usage(_) | CliError::Template(_) => None,
		}
	}
}

impl From<io::Error> for CliError {
	fn from(e: io::Error) -> Self {
		CliError::Io(e)
	}
}

impl From<walkdir::Error> for CliError {
	fn from(e: walkdir::Error) -> Self {
		CliError::Io(e.into())
	}
}

impl From<dialoguer::Error> for CliError {
	fn from(e: dialoguer::Error) -> Self {
		CliError::Prompt(e)
	}
}

impl From<RunError> for CliError {
	fn from(e: RunError) -> Self {
		CliError::Run(e)
	}
}
