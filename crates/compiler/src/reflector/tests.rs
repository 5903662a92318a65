use std::path::PathBuf;

use kiln_container::{ParameterBag, ResourceTracker};
use kiln_reflect::{MethodSignature, SignatureCatalog, Visibility};
use pretty_assertions::assert_eq;

use super::*;

fn catalog() -> SignatureCatalog {
	SignatureCatalog::new().with_class(
		ClassSignature::new("App\\Mailer")
			.with_source("/src/Mailer.php")
			.with_method(MethodSignature::public("__construct", ["transport", "sender"]))
			.with_method(MethodSignature::new("reset", Visibility::Private, ["hard"])),
	)
}

#[test]
fn returns_parameters_of_public_methods() {
	let catalog = catalog();
	let mut cache = ClassCache::default();
	let params = ParameterBag::new();
	let mut resources = ResourceTracker::new(false);
	let mut cx = VisitContext::new("mailer", &params, &mut resources);

	let mut session = ReflectionSession::begin(&mut cache, &catalog);
	let names: Vec<String> = session.parameters(&mut cx, Some("App\\Mailer"), "__construct").unwrap().into_iter().map(|p| p.name).collect();
	assert_eq!(names, vec!["transport", "sender"]);
	assert_eq!(session.cached_classes(), 1);
}

#[test]
fn classifies_failures() {
	let catalog = catalog();
	let mut cache = ClassCache::default();
	let params = ParameterBag::new();
	let mut resources = ResourceTracker::new(false);
	let mut cx = VisitContext::new("mailer", &params, &mut resources);
	let mut session = ReflectionSession::begin(&mut cache, &catalog);

	assert!(matches!(
		session.parameters(&mut cx, None, "__construct"),
		Err(ResolveError::UnresolvableClass { class: None, .. })
	));
	assert!(matches!(
		session.parameters(&mut cx, Some(""), "__construct"),
		Err(ResolveError::UnresolvableClass { class: None, .. })
	));
	assert!(matches!(
		session.parameters(&mut cx, Some("App\\Gone"), "__construct"),
		Err(ResolveError::UnresolvableClass { class: Some(ref c), .. }) if c == "App\\Gone"
	));
	assert!(matches!(
		session.parameters(&mut cx, Some("App\\Mailer"), "send"),
		Err(ResolveError::UnresolvableMethod { ref method, .. }) if method == "send"
	));
	assert!(matches!(
		session.parameters(&mut cx, Some("App\\Mailer"), "reset"),
		Err(ResolveError::NonPublicMethod {
			visibility: Visibility::Private,
			..
		})
	));
}

#[test]
fn records_each_class_once_when_tracking() {
	let catalog = catalog();
	let mut cache = ClassCache::default();
	let params = ParameterBag::new();
	let mut resources = ResourceTracker::new(true);
	{
		let mut cx = VisitContext::new("mailer", &params, &mut resources);
		let mut session = ReflectionSession::begin(&mut cache, &catalog);
		session.parameters(&mut cx, Some("App\\Mailer"), "__construct").unwrap();
		session.parameters(&mut cx, Some("\\app\\mailer"), "__construct").unwrap();
		assert_eq!(session.reflected(), 1);
	}

	let recorded: Vec<&Resource> = resources.resources().iter().collect();
	assert_eq!(
		recorded,
		vec![&Resource::Class {
			class: "App\\Mailer".into(),
			source: Some(PathBuf::from("/src/Mailer.php")),
		}]
	);
}

#[test]
fn dropping_the_session_clears_the_cache() {
	let catalog = catalog();
	let mut cache = ClassCache::default();
	let params = ParameterBag::new();
	let mut resources = ResourceTracker::new(false);
	{
		let mut cx = VisitContext::new("mailer", &params, &mut resources);
		let mut session = ReflectionSession::begin(&mut cache, &catalog);
		session.parameters(&mut cx, Some("App\\Mailer"), "__construct").unwrap();
		assert_eq!(session.cached_classes(), 1);
	}
	assert!(cache.is_empty());
}
