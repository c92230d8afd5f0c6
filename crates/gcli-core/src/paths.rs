use std::path::PathBuf;

pub const APP_NAME: &str = "gcli";

/// Name of the optional per-project override file, looked up in the working directory.
pub const PROJECT_FILE: &str = "gcli.toml";

pub fn config_dir() -> PathBuf {
	if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
		PathBuf::from(dir).join(APP_NAME)
	} else if let Some(home) = home_dir() {
		home.join(".config").join(APP_NAME)
	} else {
		PathBuf::from("/tmp").join(APP_NAME).join("config")
	}
}

pub fn global_config_path() -> PathBuf {
	config_dir().join("config.toml")
}

fn home_dir() -> Option<PathBuf> {
	std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn config_path_under_config_dir() {
		let path = global_config_path();
		assert!(path.starts_with(config_dir()));
		assert!(path.to_str().unwrap().ends_with("config.toml"));
	}
}
