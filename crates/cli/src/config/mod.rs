//! TOML service files.
//!
//! ```toml
//! [parameters]
//! mailer.class = "App\\Mailer"
//!
//! [services.mailer]
//! class = "%mailer.class%"
//! arguments = { "$sender" = "admin@example.com", "0" = "@transport" }
//! calls = [{ method = "setLogger", arguments = ["@logger"] }]
//!
//! [services.transport]
//! class = "App\\SmtpTransport"
//! arguments = [{ "!service" = { class = "App\\Socket", arguments = ["localhost", 25] } }]
//! ```
//!
//! Strings starting with `@` reference services, `@@` escapes a literal `@`.
//! A table whose only key is `!service` is an inline definition.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use kiln_container::{ArgKey, Arguments, ContainerBuilder, Definition, INLINE_TAG, Value};
use serde::Deserialize;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("I/O error reading {path}: {error}")]
	Io { path: PathBuf, error: std::io::Error },

	#[error("invalid service file")]
	Parse(#[from] toml::de::Error),

	#[error("{location}: empty service reference")]
	EmptyReference { location: String },

	#[error("{location}: invalid inline definition")]
	InlineDefinition {
		location: String,
		#[source]
		source: toml::de::Error,
	},
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceFile {
	#[serde(default)]
	parameters: IndexMap<String, toml::Value>,
	#[serde(default)]
	services: IndexMap<String, ServiceEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServiceEntry {
	#[serde(default)]
	class: Option<String>,
	#[serde(default)]
	arguments: ArgumentsEntry,
	#[serde(default)]
	calls: Vec<CallEntry>,
	#[serde(default)]
	properties: IndexMap<String, toml::Value>,
	#[serde(default)]
	public: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CallEntry {
	method: String,
	#[serde(default)]
	arguments: ArgumentsEntry,
}

/// A list is positional; a table keeps its keys (`"0"`, `"$name"`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArgumentsEntry {
	List(Vec<toml::Value>),
	Table(IndexMap<String, toml::Value>),
}

impl Default for ArgumentsEntry {
	fn default() -> Self {
		Self::List(Vec::new())
	}
}

/// Reads and converts a service file.
pub fn load_services(path: &Path) -> Result<ContainerBuilder> {
	let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	parse_services(&content)
}

pub fn parse_services(content: &str) -> Result<ContainerBuilder> {
	let file: ServiceFile = toml::from_str(content)?;
	file.into_builder()
}

impl ServiceFile {
	pub fn into_builder(self) -> Result<ContainerBuilder> {
		let mut container = ContainerBuilder::new();
		for (name, value) in self.parameters {
			let value = convert(value, &format!("parameters.{name}"))?;
			container.set_parameter(&name, value);
		}
		for (id, entry) in self.services {
			let definition = entry.into_definition(&format!("services.{id}"))?;
			container.set_definition(id, definition);
		}
		Ok(container)
	}
}

impl ServiceEntry {
	fn into_definition(self, location: &str) -> Result<Definition> {
		let mut definition = match self.class {
			Some(class) => Definition::new(class),
			None => Definition::default(),
		}
		.with_arguments(self.arguments.into_arguments(&format!("{location}.arguments"))?)
		.with_public(self.public);

		for (i, call) in self.calls.into_iter().enumerate() {
			let arguments = call.arguments.into_arguments(&format!("{location}.calls[{i}].arguments"))?;
			definition = definition.with_call(call.method, arguments);
		}
		for (name, value) in self.properties {
			let value = convert(value, &format!("{location}.properties.{name}"))?;
			definition = definition.with_property(name, value);
		}
		Ok(definition)
	}
}

impl ArgumentsEntry {
	fn into_arguments(self, location: &str) -> Result<Arguments> {
		match self {
			Self::List(values) => {
				let mut arguments = Arguments::new();
				for (i, value) in values.into_iter().enumerate() {
					arguments.push(convert(value, &format!("{location}[{i}]"))?);
				}
				Ok(arguments)
			}
			Self::Table(entries) => entries
				.into_iter()
				.map(|(key, value)| {
					let value = convert(value, &format!("{location}.{key}"))?;
					Ok((ArgKey::parse(&key), value))
				})
				.collect(),
		}
	}
}

fn convert(value: toml::Value, location: &str) -> Result<Value> {
	Ok(match value {
		toml::Value::String(s) => string_value(s, location)?,
		toml::Value::Integer(i) => Value::Int(i),
		toml::Value::Float(f) => Value::Float(f),
		toml::Value::Boolean(b) => Value::Bool(b),
		toml::Value::Datetime(dt) => Value::String(dt.to_string()),
		toml::Value::Array(items) => Value::List(
			items
				.into_iter()
				.enumerate()
				.map(|(i, item)| convert(item, &format!("{location}[{i}]")))
				.collect::<Result<_>>()?,
		),
		toml::Value::Table(mut table) => {
			if table.len() == 1
				&& let Some(inner) = table.remove(INLINE_TAG)
			{
				let location = format!("{location}.{INLINE_TAG}");
				let entry: ServiceEntry = inner.try_into().map_err(|source| ConfigError::InlineDefinition {
					location: location.clone(),
					source,
				})?;
				return Ok(Value::inline(entry.into_definition(&location)?));
			}
			Value::Map(
				table
					.into_iter()
					.map(|(key, item)| {
						let item = convert(item, &format!("{location}.{key}"))?;
						Ok((key, item))
					})
					.collect::<Result<_>>()?,
			)
		}
	})
}

fn string_value(s: String, location: &str) -> Result<Value> {
	if !s.starts_with('@') {
		return Ok(Value::String(s));
	}
	match &s[1..] {
		"" => Err(ConfigError::EmptyReference {
			location: location.to_string(),
		}),
		escaped if escaped.starts_with('@') => Ok(Value::String(escaped.to_string())),
		id => Ok(Value::reference(id)),
	}
}
