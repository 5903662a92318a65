use pretty_assertions::assert_eq;

use super::*;
use crate::{MethodSignature, MissingClass, Visibility};

fn mailer() -> ClassSignature {
	ClassSignature::new("\\App\\Mailer")
		.with_method(MethodSignature::public("__construct", ["transport", "sender"]))
		.with_method(MethodSignature::new("configure", Visibility::Protected, ["options"]))
}

#[test]
fn lookups_ignore_case_and_leading_separator() {
	let catalog = SignatureCatalog::new().with_class(mailer());

	assert!(catalog.contains("App\\Mailer"));
	assert!(catalog.contains("\\app\\mailer"));
	let class = catalog.find("APP\\MAILER").unwrap().unwrap();
	assert_eq!(class.name(), "App\\Mailer");
	assert!(class.has_method("__CONSTRUCT"));
}

#[test]
fn missing_class_strategy() {
	let catalog = SignatureCatalog::new();

	assert!(catalog.load("App\\Nope", MissingClass::Ignore).unwrap().is_none());
	let err = catalog.load("\\App\\Nope", MissingClass::Fail).unwrap_err();
	assert!(matches!(err, ReflectError::ClassNotFound { ref class } if class == "App\\Nope"));
}

#[test]
fn parameter_positions_follow_declaration_order() {
	let class = mailer();
	let ctor = class.method("__construct").unwrap();
	let positions: Vec<(&str, usize)> = ctor.parameters().iter().map(|p| (p.name.as_str(), p.position)).collect();
	assert_eq!(positions, vec![("transport", 0), ("sender", 1)]);
	assert!(!class.method("configure").unwrap().is_public());
}

#[test]
fn merging_manifests_rejects_redeclared_classes() {
	let mut catalog = SignatureCatalog::from_toml_str("[[class]]\nname = \"App\\\\Mailer\"\n").unwrap();
	let err = catalog.extend_from_toml_str("[[class]]\nname = \"app\\\\mailer\"\n", None).unwrap_err();
	assert!(matches!(err, ManifestError::DuplicateClass { .. }));
	assert_eq!(catalog.len(), 1);
}

#[test]
fn failed_merge_adds_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let first = dir.path().join("a.toml");
	let second = dir.path().join("b.toml");
	std::fs::write(&first, "[[class]]\nname = \"App\\\\A\"\n").unwrap();
	std::fs::write(&second, "[[class]]\nname = \"App\\\\B\"\n\n[[class]]\nname = \"App\\\\A\"\n").unwrap();

	let mut catalog = SignatureCatalog::load_manifest(&first).unwrap();
	let err = catalog.extend_from_manifest(&second).unwrap_err();
	assert!(matches!(err, ManifestError::DuplicateClass { ref class } if class == "App\\A"));
	assert_eq!(catalog.len(), 1);
	assert!(!catalog.contains("App\\B"));
}

#[test]
fn case_folding_is_ascii_only() {
	let catalog = SignatureCatalog::new().with_class(ClassSignature::new("App\\Ärger").with_method(MethodSignature::public("Öffnen", ["x"])));

	assert!(catalog.contains("APP\\Ärger"));
	assert!(!catalog.contains("app\\ärger"));
	let class = catalog.get("app\\Ärger").unwrap();
	assert!(class.has_method("Öffnen"));
	assert!(!class.has_method("öffnen"));
}
