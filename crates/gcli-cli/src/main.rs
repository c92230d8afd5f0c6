use clap::Parser;
use gcli::cli::{Cli, Command};
use gcli::commands::{create, run};
use owo_colors::OwoColorize;
use tracing::Level;

#[tokio::main]
async fn main() {
	let cli = Cli::parse();

	let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
	tracing_subscriber::fmt()
		.with_target(false)
		.with_max_level(level)
		.with_writer(std::io::stderr)
		.init();
	tracing::debug!(?cli, "parsed CLI arguments");

	let cwd = match std::env::current_dir() {
		Ok(dir) => dir,
		Err(e) => {
			eprintln!("{}", format!("error: {}", e).red());
			std::process::exit(1);
		}
	};
	let config = gcli_core::load_config(cli.config.as_deref(), &cwd);

	let result = match cli.command {
		Command::Run { path, args } => run::run(&config, &cwd, path, args).await,
		Command::Create { kind, name } => create::run(&config.create, &cwd, kind, &name).map(|_| ()),
	};

	if let Err(e) = result {
		eprintln!("{}", format!("error: {}", e).red());
		std::process::exit(1);
	}
}
