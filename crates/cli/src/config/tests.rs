use kiln_container::MethodCall;
use pretty_assertions::assert_eq;

use super::*;

const SERVICES: &str = r#"
[parameters]
"mailer.class" = "App\\Mailer"
sender = "@@admin"

[services.mailer]
class = "%mailer.class%"
public = true
arguments = { "$sender" = "%sender%", "0" = "@transport" }
calls = [{ method = "setLogger", arguments = ["@logger", { level = "debug" }] }]

[services.mailer.properties]
retries = 3

[services.transport]
class = "App\\SmtpTransport"
arguments = [{ "!service" = { class = "App\\Socket", arguments = { "$port" = 25 } } }]
"#;

#[test]
fn loads_definitions_in_file_order() {
	let container = parse_services(SERVICES).unwrap();

	assert_eq!(container.definition_ids().collect::<Vec<_>>(), vec!["mailer", "transport"]);
	assert_eq!(container.parameter_bag().get("sender"), Some(&Value::from("@admin")));

	let mailer = container.definition("mailer").unwrap();
	assert_eq!(mailer.class(), Some("%mailer.class%"));
	assert!(mailer.is_public());
	let keys: Vec<String> = mailer.arguments().keys().map(ToString::to_string).collect();
	assert_eq!(keys, vec!["$sender", "0"]);
	assert_eq!(mailer.arguments().get(&ArgKey::Index(0)), Some(&Value::reference("transport")));
	assert_eq!(mailer.properties().get("retries"), Some(&Value::Int(3)));

	let level: IndexMap<String, Value> = [("level".to_string(), Value::from("debug"))].into_iter().collect();
	assert_eq!(
		mailer.method_calls(),
		&[MethodCall::new("setLogger", Arguments::from_positional([Value::reference("logger"), Value::Map(level)]))]
	);
}

#[test]
fn inline_definitions_are_nested() {
	let container = parse_services(SERVICES).unwrap();
	let transport = container.definition("transport").unwrap();

	let Some(Value::Inline(socket)) = transport.arguments().get(&ArgKey::Index(0)) else {
		panic!("expected an inline definition");
	};
	assert_eq!(socket.class(), Some("App\\Socket"));
	assert_eq!(socket.arguments().get(&ArgKey::named("port")), Some(&Value::Int(25)));
}

#[test]
fn tables_with_other_keys_stay_maps() {
	let container = parse_services(
		r#"
[services.a]
class = "A"
arguments = [{ "!service" = "x", other = 1 }]
"#,
	)
	.unwrap();
	let value = container.definition("a").unwrap().arguments().get(&ArgKey::Index(0)).cloned();
	assert!(matches!(value, Some(Value::Map(ref m)) if m.len() == 2));
}

#[test]
fn empty_reference_is_rejected() {
	let err = parse_services("[services.a]\narguments = [\"@\"]\n").unwrap_err();
	assert_eq!(err.to_string(), "services.a.arguments[0]: empty service reference");
}

#[test]
fn malformed_inline_definition_is_rejected() {
	let err = parse_services("[services.a]\narguments = [{ \"!service\" = { klass = \"X\" } }]\n").unwrap_err();
	assert!(matches!(err, ConfigError::InlineDefinition { ref location, .. } if location == "services.a.arguments[0].!service"));
}

#[test]
fn unknown_service_fields_are_rejected() {
	assert!(matches!(parse_services("[services.a]\nfactory = \"x\"\n"), Err(ConfigError::Parse(_))));
}

#[test]
fn missing_file_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("nope.toml");
	let err = load_services(&path).unwrap_err();
	assert!(matches!(err, ConfigError::Io { path: ref p, .. } if p == &path));
}
