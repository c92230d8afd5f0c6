use std::fs;
use std::path::PathBuf;

use gcli::commands::create::{self, CreateKind, Outcome};
use gcli::CliError;
use gcli_core::CreateConfig;

fn project() -> tempfile::TempDir {
	let tmp = tempfile::tempdir().unwrap();
	fs::write(tmp.path().join("go.mod"), "module github.com/acme/shop\n\ngo 1.22\n").unwrap();
	tmp
}

#[test]
fn handler_lands_in_default_directory() {
	let tmp = project();
	let outcomes = create::run(&CreateConfig::default(), tmp.path(), CreateKind::Handler, "orderItem").unwrap();
	assert_eq!(outcomes, vec![Outcome::Created(PathBuf::from("internal/handler/orderitem.go"))]);

	let body = fs::read_to_string(tmp.path().join("internal/handler/orderitem.go")).unwrap();
	assert!(body.starts_with("package handler"));
	assert!(body.contains("\"github.com/acme/shop/internal/service\""));
	assert!(body.contains("type OrderItemHandler struct"));
	assert!(body.contains("orderItemService service.OrderItemService"));
	assert!(!body.contains("{{"));
}

#[test]
fn model_receiver_uses_first_char() {
	let tmp = project();
	create::run(&CreateConfig::default(), tmp.path(), CreateKind::Model, "user").unwrap();
	let body = fs::read_to_string(tmp.path().join("internal/model/user.go")).unwrap();
	assert!(body.contains("func (u *User) TableName() string"));
}

#[test]
fn existing_file_is_left_alone() {
	let tmp = project();
	let config = CreateConfig::default();
	create::run(&config, tmp.path(), CreateKind::Service, "user").unwrap();

	let path = tmp.path().join("internal/service/user.go");
	fs::write(&path, "// hand edited\n").unwrap();

	let outcomes = create::run(&config, tmp.path(), CreateKind::Service, "user").unwrap();
	assert_eq!(outcomes, vec![Outcome::Skipped(PathBuf::from("internal/service/user.go"))]);
	assert_eq!(fs::read_to_string(&path).unwrap(), "// hand edited\n");
}

#[test]
fn all_generates_every_kind() {
	let tmp = project();
	let outcomes = create::run(&CreateConfig::default(), tmp.path(), CreateKind::All, "user").unwrap();
	let created: Vec<PathBuf> = outcomes
		.into_iter()
		.map(|o| match o {
			Outcome::Created(p) => p,
			Outcome::Skipped(p) => panic!("unexpected skip of {}", p.display()),
		})
		.collect();
	assert_eq!(
		created,
		vec![
			PathBuf::from("internal/handler/user.go"),
			PathBuf::from("internal/service/user.go"),
			PathBuf::from("internal/repository/user.go"),
			PathBuf::from("internal/model/user.go"),
		]
	);
}

#[test]
fn all_skips_only_what_exists() {
	let tmp = project();
	let config = CreateConfig::default();
	create::run(&config, tmp.path(), CreateKind::Repository, "user").unwrap();

	let outcomes = create::run(&config, tmp.path(), CreateKind::All, "user").unwrap();
	assert_eq!(outcomes.len(), 4);
	assert_eq!(outcomes[2], Outcome::Skipped(PathBuf::from("internal/repository/user.go")));
	assert!(matches!(outcomes[0], Outcome::Created(_)));
	assert!(matches!(outcomes[3], Outcome::Created(_)));
}

#[test]
fn prefix_replaces_default_directory() {
	let tmp = project();
	let outcomes = create::run(&CreateConfig::default(), tmp.path(), CreateKind::Handler, "api/v1/user").unwrap();
	assert_eq!(outcomes, vec![Outcome::Created(PathBuf::from("api/v1/user.go"))]);
	assert!(tmp.path().join("api/v1/user.go").is_file());
	assert!(!tmp.path().join("internal").exists());
}

#[test]
fn configured_root_and_extension() {
	let tmp = project();
	let config = CreateConfig { root: PathBuf::from("app"), extension: "tpl".to_string() };
	let outcomes = create::run(&config, tmp.path(), CreateKind::Model, "user.tpl").unwrap();
	assert_eq!(outcomes, vec![Outcome::Created(PathBuf::from("app/model/user.tpl"))]);
}

#[test]
fn missing_go_mod_still_generates() {
	let tmp = tempfile::tempdir().unwrap();
	create::run(&CreateConfig::default(), tmp.path(), CreateKind::Service, "user").unwrap();
	let body = fs::read_to_string(tmp.path().join("internal/service/user.go")).unwrap();
	assert!(body.contains("\"/internal/model\""));
}

#[test]
fn empty_name_is_a_usage_error() {
	let tmp = project();
	let err = create::run(&CreateConfig::default(), tmp.path(), CreateKind::Handler, "api/").unwrap_err();
	assert!(matches!(err, CliError::Usage(_)));
	assert!(!tmp.path().join("api").exists());
}

#[test]
fn all_with_prefix_shares_one_target() {
	let tmp = project();
	let outcomes = create::run(&CreateConfig::default(), tmp.path(), CreateKind::All, "api/v1/order").unwrap();
	let target = PathBuf::from("api/v1/order.go");
	assert_eq!(
		outcomes,
		vec![
			Outcome::Created(target.clone()),
			Outcome::Skipped(target.clone()),
			Outcome::Skipped(target.clone()),
			Outcome::Skipped(target),
		]
	);
	let body = fs::read_to_string(tmp.path().join("api/v1/order.go")).unwrap();
	assert!(body.starts_with("package handler"));
}
