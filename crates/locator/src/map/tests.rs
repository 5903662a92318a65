use std::sync::Arc;

use super::*;

#[test]
fn services_are_shared_not_cloned() {
	let map = ServiceMap::new().with("router", String::from("/home"));

	let first = map.get("router").unwrap();
	let second = map.get("router").unwrap();
	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(first.downcast_ref::<String>().map(String::as_str), Some("/home"));
}

#[test]
fn insert_replaces_and_remove_forgets() {
	let mut map = ServiceMap::new();
	assert!(map.insert("session", 1_u32).is_none());
	assert!(map.insert("session", 2_u32).is_some());
	assert_eq!(map.len(), 1);

	assert!(map.remove("session").is_some());
	assert!(!map.has("session"));
	assert!(map.is_empty());
}

#[test]
fn debug_lists_ids_in_order() {
	let map = ServiceMap::new().with("twig", ()).with("router", ());
	assert_eq!(format!("{map:?}"), r#"ServiceMap { ids: ["router", "twig"] }"#);
}
