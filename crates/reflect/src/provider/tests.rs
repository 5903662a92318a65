use pretty_assertions::assert_eq;

use super::*;
use crate::{ManifestDirectory, MethodSignature, SignatureCatalog};

fn catalog(class: &str, params: [&str; 1]) -> SignatureCatalog {
	SignatureCatalog::new().with_class(ClassSignature::new(class).with_method(MethodSignature::public("__construct", params)))
}

#[test]
fn first_provider_that_knows_the_class_wins() {
	let chain = ProviderChain::new()
		.with(catalog("App\\Mailer", ["transport"]))
		.with(catalog("App\\Mailer", ["shadowed"]))
		.with(catalog("App\\Logger", ["channel"]));

	let mailer = chain.find("App\\Mailer").unwrap().unwrap();
	assert_eq!(mailer.method("__construct").unwrap().parameters()[0].name, "transport");
	assert!(chain.find("App\\Logger").unwrap().is_some());
	assert_eq!(chain.len(), 3);
}

#[test]
fn unknown_class_follows_missing_strategy() {
	let chain = ProviderChain::new().with(catalog("App\\Mailer", ["transport"]));

	assert!(chain.load("App\\Nope", MissingClass::Ignore).unwrap().is_none());
	assert!(matches!(chain.load("App\\Nope", MissingClass::Fail), Err(ReflectError::ClassNotFound { .. })));
	assert!(ProviderChain::new().find("App\\Mailer").unwrap().is_none());
}

#[test]
fn provider_errors_stop_the_search() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::create_dir_all(dir.path().join("App")).unwrap();
	std::fs::write(dir.path().join("App/Mailer.toml"), "not = [valid").unwrap();

	let chain = ProviderChain::new()
		.with(ManifestDirectory::new(dir.path()))
		.with(catalog("App\\Mailer", ["transport"]));
	assert!(matches!(chain.find("App\\Mailer"), Err(ReflectError::Unavailable { .. })));
}
