use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::paths::{global_config_path, PROJECT_FILE};

// ── Global config (~/.config/gcli/config.toml) ──────────────────────────────

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Config {
	#[serde(default)]
	pub run: RunConfig,
	#[serde(default)]
	pub create: CreateConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RunConfig {
	/// Toolchain executable used to launch the target program.
	#[serde(default = "default_command")]
	pub command: String,
	/// Arguments placed before the target directory.
	#[serde(default = "default_args")]
	pub args: Vec<String>,
	/// File extensions (without the dot) that put a file in the watch set.
	#[serde(default = "default_extensions")]
	pub extensions: Vec<String>,
	#[serde(default = "default_watch_root")]
	pub watch_root: PathBuf,
	#[serde(default = "default_settle_delay")]
	pub settle_delay_ms: u64,
	/// File that marks a directory as a runnable entry point.
	#[serde(default = "default_entry_file")]
	pub entry_file: String,
	#[serde(default)]
	pub env: HashMap<String, String>,
}

impl Default for RunConfig {
	fn default() -> Self {
		Self {
			command: default_command(),
			args: default_args(),
			extensions: default_extensions(),
			watch_root: default_watch_root(),
			settle_delay_ms: default_settle_delay(),
			entry_file: default_entry_file(),
			env: HashMap::new(),
		}
	}
}

fn default_command() -> String {
	"go".into()
}
fn default_args() -> Vec<String> {
	vec!["run".into()]
}
fn default_extensions() -> Vec<String> {
	["go", "yml", "yaml", "html"].iter().map(|s| s.to_string()).collect()
}
fn default_watch_root() -> PathBuf {
	PathBuf::from(".")
}
fn default_settle_delay() -> u64 {
	1000
}
fn default_entry_file() -> String {
	"main.go".into()
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CreateConfig {
	/// Parent of the per-kind default directories (`<root>/handler/` and so on).
	#[serde(default = "default_create_root")]
	pub root: PathBuf,
	#[serde(default = "default_create_extension")]
	pub extension: String,
}

impl Default for CreateConfig {
	fn default() -> Self {
		Self { root: default_create_root(), extension: default_create_extension() }
	}
}

fn default_create_root() -> PathBuf {
	PathBuf::from("internal")
}
fn default_create_extension() -> String {
	"go".into()
}

// ── gcli.toml (per-project overrides) ────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectToml {
	#[serde(default)]
	pub run: RunOverride,
	#[serde(default)]
	pub create: CreateOverride,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RunOverride {
	pub command: Option<String>,
	pub args: Option<Vec<String>>,
	pub extensions: Option<Vec<String>>,
	pub watch_root: Option<PathBuf>,
	pub settle_delay_ms: Option<u64>,
	pub entry_file: Option<String>,
	#[serde(default)]
	pub env: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CreateOverride {
	pub root: Option<PathBuf>,
	pub extension: Option<String>,
}

impl Config {
	pub fn apply(&mut self, project: ProjectToml) {
		let run = project.run;
		if let Some(command) = run.command {
			self.run.command = command;
		}
		if let Some(args) = run.args {
			self.run.args = args;
		}
		if let Some(extensions) = run.extensions {
			self.run.extensions = extensions;
		}
		if let Some(root) = run.watch_root {
			self.run.watch_root = root;
		}
		if let Some(delay) = run.settle_delay_ms {
			self.run.settle_delay_ms = delay;
		}
		if let Some(entry) = run.entry_file {
			self.run.entry_file = entry;
		}
		self.run.env.extend(run.env);

		if let Some(root) = project.create.root {
			self.create.root = root;
		}
		if let Some(ext) = project.create.extension {
			self.create.extension = ext;
		}
	}
}

/// Load the global config (or `global_override` when given) and layer the
/// project's `gcli.toml` from `project_dir` on top of it.
pub fn load_config(global_override: Option<&Path>, project_dir: &Path) -> Config {
	let global_path = global_override
		.map(Path::to_path_buf)
		.unwrap_or_else(global_config_path);
	let mut config: Config = read_toml(&global_path).unwrap_or_default();

	if let Some(project) = read_toml::<ProjectToml>(&project_dir.join(PROJECT_FILE)) {
		config.apply(project);
	}
	config
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Option<T> {
	if !path.exists() {
		return None;
	}
	match std::fs::read_to_string(path) {
		Ok(content) => match toml::from_str(&content) {
			Ok(value) => Some(value),
			Err(e) => {
				tracing::warn!("failed to parse {}: {}", path.display(), e);
				None
			}
		},
		Err(e) => {
			tracing::warn!("failed to read {}: {}", path.display(), e);
			None
		}
	}
}
