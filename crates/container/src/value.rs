use indexmap::IndexMap;

use crate::Definition;

/// A configured value: an argument, a property, or a parameter.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	String(String),
	List(Vec<Value>),
	Map(IndexMap<String, Value>),
	/// Reference to another service by id.
	Reference(String),
	/// Anonymous definition nested inside another definition's values.
	Inline(Box<Definition>),
}

impl Value {
	/// Creates a service reference.
	pub fn reference(id: impl Into<String>) -> Self {
		Self::Reference(id.into())
	}

	/// Wraps a definition as an inline value.
	pub fn inline(definition: Definition) -> Self {
		Self::Inline(Box::new(definition))
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}

	/// Returns true for values that may be interpolated into a string.
	pub fn is_interpolable(&self) -> bool {
		matches!(self, Self::String(_) | Self::Int(_) | Self::Float(_))
	}

	/// Short type name for diagnostics.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::String(_) => "string",
			Self::List(_) => "list",
			Self::Map(_) => "map",
			Self::Reference(_) => "reference",
			Self::Inline(_) => "definition",
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::List(value)
	}
}

impl From<Definition> for Value {
	fn from(value: Definition) -> Self {
		Self::inline(value)
	}
}
