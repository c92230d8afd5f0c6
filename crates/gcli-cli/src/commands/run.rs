use std::path::Path;
use std::time::Duration;

use dialoguer::Select;
use gcli_core::{Config, RunConfig};
use gcli_run::{LaunchSpec, RunOptions, RunSession};
use owo_colors::OwoColorize;

use crate::error::CliError;
use crate::project;

const NO_ENTRY_POINT: &str = "The cmd directory cannot be found in the current working directory";

/// `gcli run [path] [-- args...]` from `cwd`.
///
/// Returns once the supervised program has been killed in response to
/// SIGINT/SIGTERM, or quietly if the operator cancels the directory prompt.
pub async fn run(
	config: &Config,
	cwd: &Path,
	path: Option<String>,
	program_args: Vec<String>,
) -> Result<(), CliError> {
	let dir = match path {
		Some(dir) => dir,
		None => match resolve_target(cwd, &config.run.entry_file, prompt_for_target)? {
			Some(dir) => dir,
			None => return Ok(()),
		},
	};

	println!("{}", format!("gcli run {}.", dir).magenta());

	let session = RunSession::open(run_options(&config.run, cwd, &dir, &program_args))?;
	session.run().await?;

	println!("{}", "server exiting...".red());
	Ok(())
}

/// Pick the entry-point directory when none was given.
///
/// `choose` is only consulted with two or more candidates and returns the
/// index picked, or `None` if the operator backed out.
pub fn resolve_target<F>(cwd: &Path, entry_file: &str, choose: F) -> Result<Option<String>, CliError>
where
	F: FnOnce(&[String]) -> Result<Option<usize>, CliError>,
{
	let candidates = project::find_main(cwd, entry_file)?;
	match candidates.len() {
		0 => Err(CliError::Usage(NO_ENTRY_POINT.to_string())),
		1 => Ok(candidates.into_values().next()),
		_ => {
			let keys: Vec<String> = candidates.keys().cloned().collect();
			let picked = choose(&keys)?;
			Ok(picked
				.and_then(|i| keys.get(i))
				.and_then(|key| candidates.get(key))
				.cloned())
		}
	}
}

fn prompt_for_target(options: &[String]) -> Result<Option<usize>, CliError> {
	let choice = Select::new()
		.with_prompt("Which directory do you want to run?")
		.items(options)
		.default(0)
		.max_length(10)
		.interact_opt()?;
	Ok(choice)
}

/// `<command> <args...> <dir> <program-args...>`, launched from `cwd`.
pub fn run_options(run: &RunConfig, cwd: &Path, dir: &str, program_args: &[String]) -> RunOptions {
	let mut args = run.args.clone();
	args.push(dir.to_string());
	args.extend(program_args.iter().cloned());

	RunOptions {
		watch_root: cwd.join(&run.watch_root),
		extensions: run.extensions.clone(),
		launch: LaunchSpec {
			program: run.command.clone(),
			args,
			working_dir: cwd.to_path_buf(),
			env: run.env.clone(),
		},
		settle_delay: Duration::from_millis(run.settle_delay_ms),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn options_place_dir_between_toolchain_and_program_args() {
		let config = RunConfig::default();
		let opts = run_options(
			&config,
			Path::new("/work/shop"),
			"./cmd/server",
			&["-conf".to_string(), "config/local.yml".to_string()],
		);
		assert_eq!(opts.launch.program, "go");
		assert_eq!(opts.launch.args, vec!["run", "./cmd/server", "-conf", "config/local.yml"]);
		assert_eq!(opts.launch.working_dir, Path::new("/work/shop"));
		assert_eq!(opts.watch_root, Path::new("/work/shop/."));
		assert_eq!(opts.settle_delay, Duration::from_secs(1));
	}
}
