use rust_embed::RustEmbed;

use crate::error::CliError;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Assets;

/// Load `templates/create/<name>.tmpl` from the binary.
pub fn load(name: &str) -> Result<String, CliError> {
	let path = format!("create/{}.tmpl", name);
	let file = Assets::get(&path).ok_or_else(|| CliError::Template(format!("no template {}", path)))?;
	String::from_utf8(file.data.into_owned())
		.map_err(|e| CliError::Template(format!("{} is not utf-8: {}", path, e)))
}

/// Replace every `{{key}}` with its value.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
	let mut output = template.to_string();
	for (key, value) in vars {
		output = output.replace(&format!("{{{{{}}}}}", key), value);
	}
	output
}

pub fn upper_first(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(c) => c.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

pub fn lower_first(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(c) => c.to_lowercase().chain(chars).collect(),
		None => String::new(),
	}
}
