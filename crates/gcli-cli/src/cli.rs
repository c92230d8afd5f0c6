use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::create::CreateKind;

/// Scaffold Go project files and run the project with live restart.
#[derive(Parser, Debug)]
#[command(name = "gcli", version, about)]
pub struct Cli {
	/// Global config file (default: ~/.config/gcli/config.toml)
	#[arg(short, long, global = true)]
	pub config: Option<PathBuf>,

	/// Extra logging (watch registrations, kill results)
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Run the project, restarting it whenever a watched file changes
	#[command(after_help = "Example: gcli run ./cmd/server -- -conf config/local.yml")]
	Run {
		/// Directory containing main.go (searched for when omitted)
		path: Option<String>,

		/// Arguments passed through to the program
		#[arg(last = true)]
		args: Vec<String>,
	},
	/// Create a new handler/service/repository/model
	#[command(after_help = "Example: gcli create handler user")]
	Create {
		#[arg(value_enum)]
		kind: CreateKind,

		/// File name, optionally with a directory prefix (api/v1/user)
		name: String,
	},
}
