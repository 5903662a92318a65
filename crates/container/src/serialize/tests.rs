use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

#[test]
fn serialises_in_service_file_shape() {
	let mut container = ContainerBuilder::new();
	container.set_parameter("sender", "@admin");
	container
		.register("mailer", "App\\Mailer")
		.set_arguments([("0", Value::reference("transport")), ("$retries", Value::Int(3))].into_iter().collect());
	container
		.definition_mut("mailer")
		.unwrap()
		.add_method_call("setLogger", Arguments::from_positional([Value::inline(Definition::new("App\\Logger"))]));

	let value = serde_json::to_value(&container).unwrap();
	assert_eq!(
		value,
		json!({
			"parameters": { "sender": "@@admin" },
			"services": {
				"mailer": {
					"class": "App\\Mailer",
					"public": false,
					"arguments": { "0": "@transport", "$retries": 3 },
					"calls": [{
						"method": "setLogger",
						"arguments": { "0": { "!service": {
							"class": "App\\Logger",
							"public": false,
							"arguments": {},
							"calls": [],
							"properties": {}
						} } }
					}],
					"properties": {}
				}
			}
		})
	);
}
