//! Parameter bag and `%placeholder%` expansion.
//!
//! A string that is exactly `%name%` resolves to the parameter's value, of any
//! type. Placeholders embedded in a longer string are interpolated and must
//! refer to strings or numbers. `%%` is a literal `%`. Parameters may refer to
//! other parameters; cycles are rejected.

use indexmap::IndexMap;
use thiserror::Error;

use crate::Value;

#[cfg(test)]
mod tests;

/// Errors raised while expanding placeholders.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
	#[error("you have requested a non-existent parameter \"{key}\"")]
	ParameterNotFound { key: String },

	#[error("circular reference detected for parameter \"{}\" (\"{}\")", .path.last().map(String::as_str).unwrap_or_default(), .path.join("\" > \""))]
	CircularReference { path: Vec<String> },

	#[error("a string value must be composed of strings and/or numbers, but found parameter \"{key}\" of type {found} inside string value \"{input}\"")]
	NonScalarInterpolation { key: String, found: &'static str, input: String },

	#[error("\"{input}\" must resolve to a string, got {found}")]
	NotAString { input: String, found: &'static str },
}

/// Parameter store whose names ignore ASCII case.
#[derive(Debug, Clone, Default)]
pub struct ParameterBag {
	parameters: IndexMap<String, Value>,
}

impl ParameterBag {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(&mut self, name: &str, value: impl Into<Value>) {
		self.parameters.insert(name.to_ascii_lowercase(), value.into());
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.parameters.get(&name.to_ascii_lowercase())
	}

	pub fn has(&self, name: &str) -> bool {
		self.parameters.contains_key(&name.to_ascii_lowercase())
	}

	pub fn remove(&mut self, name: &str) -> Option<Value> {
		self.parameters.shift_remove(&name.to_ascii_lowercase())
	}

	pub fn len(&self) -> usize {
		self.parameters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parameters.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.parameters.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Expands placeholders in a value, recursing into lists and maps.
	pub fn resolve_value(&self, value: &Value) -> Result<Value, ParameterError> {
		self.resolve_value_inner(value, &mut Vec::new())
	}

	/// Expands placeholders in a string.
	pub fn resolve_string(&self, input: &str) -> Result<Value, ParameterError> {
		self.resolve_string_inner(input, &mut Vec::new())
	}

	/// Expands placeholders in a string that must stay a string, such as a class name.
	pub fn resolve_to_string(&self, input: &str) -> Result<String, ParameterError> {
		match self.resolve_string(input)? {
			Value::String(s) => Ok(s),
			other => Err(ParameterError::NotAString {
				input: input.to_string(),
				found: other.type_name(),
			}),
		}
	}

	fn resolve_value_inner(&self, value: &Value, stack: &mut Vec<String>) -> Result<Value, ParameterError> {
		match value {
			Value::String(s) => self.resolve_string_inner(s, stack),
			Value::List(items) => items.iter().map(|v| self.resolve_value_inner(v, stack)).collect::<Result<Vec<_>, _>>().map(Value::List),
			Value::Map(entries) => {
				let mut resolved = IndexMap::with_capacity(entries.len());
				for (k, v) in entries {
					let key = match self.resolve_string_inner(k, stack)? {
						Value::String(s) => s,
						other => {
							return Err(ParameterError::NotAString {
								input: k.clone(),
								found: other.type_name(),
							});
						}
					};
					resolved.insert(key, self.resolve_value_inner(v, stack)?);
				}
				Ok(Value::Map(resolved))
			}
			other => Ok(other.clone()),
		}
	}

	fn resolve_string_inner(&self, input: &str, stack: &mut Vec<String>) -> Result<Value, ParameterError> {
		if let Some(name) = whole_placeholder(input) {
			return self.lookup(name, stack);
		}

		let mut out = String::with_capacity(input.len());
		let mut rest = input;
		while let Some(start) = rest.find('%') {
			out.push_str(&rest[..start]);
			let tail = &rest[start + 1..];

			if let Some(after) = tail.strip_prefix('%') {
				out.push('%');
				rest = after;
				continue;
			}

			match placeholder_name(tail) {
				Some(name) => {
					match self.lookup(name, stack)? {
						Value::String(s) => out.push_str(&s),
						Value::Int(i) => out.push_str(&i.to_string()),
						Value::Float(f) => out.push_str(&f.to_string()),
						other => {
							return Err(ParameterError::NonScalarInterpolation {
								key: name.to_ascii_lowercase(),
								found: other.type_name(),
								input: input.to_string(),
							});
						}
					}
					rest = &tail[name.len() + 1..];
				}
				None => {
					out.push('%');
					rest = tail;
				}
			}
		}
		out.push_str(rest);
		Ok(Value::String(out))
	}

	fn lookup(&self, name: &str, stack: &mut Vec<String>) -> Result<Value, ParameterError> {
		let key = name.to_ascii_lowercase();
		if stack.contains(&key) {
			let mut path = stack.clone();
			path.push(key);
			return Err(ParameterError::CircularReference { path });
		}
		let value = self.parameters.get(&key).ok_or_else(|| ParameterError::ParameterNotFound { key: key.clone() })?;

		stack.push(key);
		let resolved = self.resolve_value_inner(value, stack);
		stack.pop();
		resolved
	}
}

/// Returns the name if `input` is exactly one `%name%` placeholder.
fn whole_placeholder(input: &str) -> Option<&str> {
	let inner = input.strip_prefix('%')?.strip_suffix('%')?;
	is_placeholder_name(inner).then_some(inner)
}

/// Returns the name of the placeholder opening at the start of `tail` (just
/// past its `%`), if a closing `%` follows a valid name.
fn placeholder_name(tail: &str) -> Option<&str> {
	let end = tail.find('%')?;
	let name = &tail[..end];
	is_placeholder_name(name).then_some(name)
}

fn is_placeholder_name(name: &str) -> bool {
	!name.is_empty() && !name.contains(|c: char| c == '%' || c.is_whitespace())
}
