use pretty_assertions::assert_eq;

use super::*;

fn bag() -> ParameterBag {
	let mut bag = ParameterBag::new();
	bag.set("mailer.class", "App\\Mailer");
	bag.set("Mailer.Transport", "smtp");
	bag.set("port", 25_i64);
	bag.set("hosts", Value::List(vec!["a".into(), "b".into()]));
	bag.set("alias", "%mailer.class%");
	bag
}

#[test]
fn whole_placeholder_keeps_type() {
	let bag = bag();
	assert_eq!(bag.resolve_string("%port%"), Ok(Value::Int(25)));
	assert_eq!(bag.resolve_string("%hosts%"), Ok(Value::List(vec!["a".into(), "b".into()])));
}

#[test]
fn names_are_case_insensitive() {
	let bag = bag();
	assert!(bag.has("MAILER.TRANSPORT"));
	assert_eq!(bag.resolve_to_string("%mailer.transport%").as_deref(), Ok("smtp"));
}

#[test]
fn interpolates_scalars() {
	let bag = bag();
	assert_eq!(bag.resolve_to_string("%mailer.transport%://localhost:%port%").as_deref(), Ok("smtp://localhost:25"));
}

#[test]
fn double_percent_is_literal() {
	let bag = bag();
	assert_eq!(bag.resolve_to_string("100%% of %port%").as_deref(), Ok("100% of 25"));
	assert_eq!(bag.resolve_to_string("50% off").as_deref(), Ok("50% off"));
}

#[test]
fn nested_parameters_resolve() {
	let bag = bag();
	assert_eq!(bag.resolve_to_string("%alias%").as_deref(), Ok("App\\Mailer"));
}

#[test]
fn missing_parameter() {
	let bag = bag();
	assert_eq!(
		bag.resolve_string("%nope%"),
		Err(ParameterError::ParameterNotFound { key: "nope".into() })
	);
}

#[test]
fn circular_reference() {
	let mut bag = ParameterBag::new();
	bag.set("a", "%b%");
	bag.set("b", "x-%a%");

	let err = bag.resolve_string("%a%").unwrap_err();
	assert_eq!(
		err,
		ParameterError::CircularReference {
			path: vec!["a".into(), "b".into(), "a".into()]
		}
	);
	assert!(err.to_string().contains("\"a\" > \"b\" > \"a\""));
}

#[test]
fn non_scalar_interpolation_is_rejected() {
	let bag = bag();
	let err = bag.resolve_string("hosts: %hosts%").unwrap_err();
	assert!(matches!(err, ParameterError::NonScalarInterpolation { ref key, found: "list", .. } if key == "hosts"));
}

#[test]
fn class_names_must_be_strings() {
	let bag = bag();
	assert_eq!(
		bag.resolve_to_string("%port%"),
		Err(ParameterError::NotAString {
			input: "%port%".into(),
			found: "int"
		})
	);
}

#[test]
fn resolves_inside_collections() {
	let bag = bag();
	let value = Value::List(vec!["%port%".into(), Value::reference("%port%")]);
	assert_eq!(bag.resolve_value(&value), Ok(Value::List(vec![Value::Int(25), Value::reference("%port%")])));
}

#[test]
fn names_fold_ascii_case_only() {
	let mut bag = ParameterBag::new();
	bag.set("Größe", 3_i64);
	assert!(bag.has("GRößE"));
	assert!(!bag.has("gRÖßE"));
}
