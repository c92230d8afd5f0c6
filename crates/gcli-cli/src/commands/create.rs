use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use gcli_core::CreateConfig;
use owo_colors::OwoColorize;

use crate::error::CliError;
use crate::project;
use crate::templates::{self, lower_first, render, upper_first};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CreateKind {
	Handler,
	Service,
	Repository,
	Model,
	/// handler, service, repository and model
	All,
}

impl CreateKind {
	pub fn as_str(self) -> &'static str {
		match self {
			CreateKind::Handler => "handler",
			CreateKind::Service => "service",
			CreateKind::Repository => "repository",
			CreateKind::Model => "model",
			CreateKind::All => "all",
		}
	}

	/// The concrete kinds to generate, in generation order.
	pub fn expand(self) -> &'static [CreateKind] {
		match self {
			CreateKind::Handler => &[CreateKind::Handler],
			CreateKind::Service => &[CreateKind::Service],
			CreateKind::Repository => &[CreateKind::Repository],
			CreateKind::Model => &[CreateKind::Model],
			CreateKind::All => &[
				CreateKind::Handler,
				CreateKind::Service,
				CreateKind::Repository,
				CreateKind::Model,
			],
		}
	}
}

/// Values substituted into every template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateParams {
	pub project_name: String,
	/// Directory prefix given with the name (`api/v1/` in `api/v1/user`).
	pub file_path: Option<PathBuf>,
	pub file_name: String,
	pub file_name_title_lower: String,
	pub file_name_first_char: String,
}

impl CreateParams {
	pub fn new(project_name: &str, name: &str, extension: &str) -> Result<Self, CliError> {
		let (prefix, base) = match name.rfind('/') {
			Some(i) => (Some(&name[..=i]), &name[i + 1..]),
			None => (None, name),
		};
		let base = base.strip_suffix(&format!(".{}", extension)).unwrap_or(base);
		if base.is_empty() {
			return Err(CliError::Usage(format!("invalid name '{}': missing file name", name)));
		}

		let file_name = upper_first(base);
		let file_name_title_lower = lower_first(&file_name);
		let file_name_first_char = file_name_title_lower.chars().take(1).collect();

		Ok(Self {
			project_name: project_name.to_string(),
			file_path: prefix.map(PathBuf::from),
			file_name,
			file_name_title_lower,
			file_name_first_char,
		})
	}

	pub fn vars(&self) -> [(&str, &str); 4] {
		[
			("ProjectName", self.project_name.as_str()),
			("FileName", self.file_name.as_str()),
			("FileNameTitleLower", self.file_name_title_lower.as_str()),
			("FileNameFirstChar", self.file_name_first_char.as_str()),
		]
	}

	/// Output path relative to the project root.
	pub fn target(&self, kind: CreateKind, config: &CreateConfig) -> PathBuf {
		let dir = match &self.file_path {
			Some(prefix) => prefix.clone(),
			None => config.root.join(kind.as_str()),
		};
		dir.join(format!("{}.{}", self.file_name.to_lowercase(), config.extension))
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	Created(PathBuf),
	Skipped(PathBuf),
}

/// `gcli create <kind> <name>` rooted at `project_dir`.
pub fn run(
	config: &CreateConfig,
	project_dir: &Path,
	kind: CreateKind,
	name: &str,
) -> Result<Vec<Outcome>, CliError> {
	let project_name = project::project_name(project_dir).unwrap_or_else(|| {
		tracing::warn!("no module declared in {}", project_dir.join("go.mod").display());
		String::new()
	});
	let params = CreateParams::new(&project_name, name, &config.extension)?;

	kind.expand()
		.iter()
		.map(|&k| generate(config, project_dir, k, &params))
		.collect()
}

fn generate(
	config: &CreateConfig,
	project_dir: &Path,
	kind: CreateKind,
	params: &CreateParams,
) -> Result<Outcome, CliError> {
	let rel = params.target(kind, config);
	let path = project_dir.join(&rel);
	if let Some(dir) = path.parent() {
		fs::create_dir_all(dir)?;
	}

	if path.exists() {
		tracing::warn!("file {} already exists", rel.display());
		return Ok(Outcome::Skipped(rel));
	}

	let template = templates::load(kind.as_str())?;
	let content = render(&template, &params.vars());

	let mut file = OpenOptions::new().write(true).create_new(true).open(&path)?;
	file.write_all(content.as_bytes())?;

	println!(
		"{} Created new {}: {}",
		"✓".green(),
		kind.as_str(),
		rel.display().to_string().cyan()
	);
	Ok(Outcome::Created(rel))
}
