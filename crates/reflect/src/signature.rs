use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

/// Strips one leading namespace separator.
pub fn normalize_class(name: &str) -> &str {
	name.strip_prefix('\\').unwrap_or(name)
}

/// Lookup key for a class name: normalised, ASCII case folded.
pub fn class_key(name: &str) -> String {
	normalize_class(name).to_ascii_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
	#[default]
	Public,
	Protected,
	Private,
}

impl fmt::Display for Visibility {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Public => "public",
			Self::Protected => "protected",
			Self::Private => "private",
		})
	}
}

/// One formal parameter of a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
	pub name: String,
	pub position: usize,
	pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
	name: String,
	visibility: Visibility,
	parameters: Vec<ParameterInfo>,
}

impl MethodSignature {
	/// Creates a signature whose parameter positions follow the given order.
	pub fn new<I, S>(name: impl Into<String>, visibility: Visibility, parameters: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let parameters = parameters
			.into_iter()
			.enumerate()
			.map(|(position, name)| ParameterInfo {
				name: name.into(),
				position,
				optional: false,
			})
			.collect();
		Self {
			name: name.into(),
			visibility,
			parameters,
		}
	}

	pub fn public<I, S>(name: impl Into<String>, parameters: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::new(name, Visibility::Public, parameters)
	}

	/// Marks trailing parameters from `position` on as optional.
	pub fn with_optional_from(mut self, position: usize) -> Self {
		for param in self.parameters.iter_mut().skip(position) {
			param.optional = true;
		}
		self
	}

	pub(crate) fn from_parts(name: String, visibility: Visibility, parameters: Vec<ParameterInfo>) -> Self {
		Self { name, visibility, parameters }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn visibility(&self) -> Visibility {
		self.visibility
	}

	pub fn is_public(&self) -> bool {
		self.visibility == Visibility::Public
	}

	/// Parameters in declaration order.
	pub fn parameters(&self) -> &[ParameterInfo] {
		&self.parameters
	}

	pub fn parameter(&self, name: &str) -> Option<&ParameterInfo> {
		self.parameters.iter().find(|p| p.name == name)
	}
}

/// Introspected shape of one class.
///
/// Method lookups ignore ASCII case, like the class lookups of every provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSignature {
	name: String,
	source: Option<PathBuf>,
	methods: IndexMap<String, MethodSignature>,
}

impl ClassSignature {
	pub fn new(name: &str) -> Self {
		Self {
			name: normalize_class(name).to_string(),
			source: None,
			methods: IndexMap::new(),
		}
	}

	pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
		self.source = Some(source.into());
		self
	}

	/// Adds a method, replacing any method of the same name.
	pub fn with_method(mut self, method: MethodSignature) -> Self {
		self.insert_method(method);
		self
	}

	/// Inserts a method; returns false if one with the same name existed.
	pub fn insert_method(&mut self, method: MethodSignature) -> bool {
		self.methods.insert(method.name.to_ascii_lowercase(), method).is_none()
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// File the class was declared in, if known.
	pub fn source(&self) -> Option<&Path> {
		self.source.as_deref()
	}

	pub fn method(&self, name: &str) -> Option<&MethodSignature> {
		self.methods.get(&name.to_ascii_lowercase())
	}

	pub fn has_method(&self, name: &str) -> bool {
		self.methods.contains_key(&name.to_ascii_lowercase())
	}

	pub fn methods(&self) -> impl Iterator<Item = &MethodSignature> {
		self.methods.values()
	}
}
