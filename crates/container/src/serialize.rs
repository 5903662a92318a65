//! `serde` serialisation in the shape of the service file format.
//!
//! References serialise as `@id` (a literal leading `@` is doubled), inline
//! definitions as a single-key `!service` map, argument keys as strings.

use serde::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::{Arguments, ContainerBuilder, Definition, MethodCall, Resource, Value};

#[cfg(test)]
mod tests;

/// Key of the single-entry map that wraps an inline definition.
pub const INLINE_TAG: &str = "!service";

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Bool(b) => serializer.serialize_bool(*b),
			Self::Int(i) => serializer.serialize_i64(*i),
			Self::Float(f) => serializer.serialize_f64(*f),
			Self::String(s) if s.starts_with('@') => serializer.serialize_str(&format!("@{s}")),
			Self::String(s) => serializer.serialize_str(s),
			Self::List(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Map(entries) => {
				let mut map = serializer.serialize_map(Some(entries.len()))?;
				for (k, v) in entries {
					map.serialize_entry(k, v)?;
				}
				map.end()
			}
			Self::Reference(id) => serializer.serialize_str(&format!("@{id}")),
			Self::Inline(definition) => {
				let mut map = serializer.serialize_map(Some(1))?;
				map.serialize_entry(INLINE_TAG, definition.as_ref())?;
				map.end()
			}
		}
	}
}

impl Serialize for Arguments {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (key, value) in self {
			map.serialize_entry(&key.to_string(), value)?;
		}
		map.end()
	}
}

impl Serialize for MethodCall {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut call = serializer.serialize_struct("MethodCall", 2)?;
		call.serialize_field("method", &self.method)?;
		call.serialize_field("arguments", &self.arguments)?;
		call.end()
	}
}

impl Serialize for Definition {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut def = serializer.serialize_struct("Definition", 5)?;
		match self.class() {
			Some(class) => def.serialize_field("class", class)?,
			None => def.skip_field("class")?,
		}
		def.serialize_field("public", &self.is_public())?;
		def.serialize_field("arguments", self.arguments())?;
		def.serialize_field("calls", self.method_calls())?;
		def.serialize_field("properties", self.properties())?;
		def.end()
	}
}

impl Serialize for Resource {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Class { class, source } => {
				let mut res = serializer.serialize_struct("Resource", 3)?;
				res.serialize_field("kind", "class")?;
				res.serialize_field("class", class)?;
				match source {
					Some(path) => res.serialize_field("source", path)?,
					None => res.skip_field("source")?,
				}
				res.end()
			}
		}
	}
}

impl Serialize for ContainerBuilder {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		struct Parameters<'a>(&'a crate::ParameterBag);

		impl Serialize for Parameters<'_> {
			fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				serializer.collect_map(self.0.iter())
			}
		}

		let mut container = serializer.serialize_struct("ContainerBuilder", 2)?;
		container.serialize_field("parameters", &Parameters(&self.parameters))?;
		container.serialize_field("services", &self.definitions)?;
		container.end()
	}
}
