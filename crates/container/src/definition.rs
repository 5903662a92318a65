use indexmap::IndexMap;

use crate::{Arguments, Value};

/// Method name of the constructor call.
pub const CONSTRUCTOR: &str = "__construct";

/// One configured method invocation on a service.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
	pub method: String,
	pub arguments: Arguments,
}

impl MethodCall {
	pub fn new(method: impl Into<String>, arguments: Arguments) -> Self {
		Self {
			method: method.into(),
			arguments,
		}
	}

	pub fn is_constructor(&self) -> bool {
		self.method == CONSTRUCTOR
	}
}

/// Build-time description of how to construct and configure one service.
///
/// Every setter bumps [`revision`](Self::revision), so callers that must not
/// invalidate downstream caches should only call a setter when the value
/// actually differs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Definition {
	class: Option<String>,
	arguments: Arguments,
	calls: Vec<MethodCall>,
	properties: IndexMap<String, Value>,
	public: bool,
	revision: u64,
}

impl Definition {
	pub fn new(class: impl Into<String>) -> Self {
		Self {
			class: Some(class.into()),
			..Self::default()
		}
	}

	pub fn with_arguments(mut self, arguments: Arguments) -> Self {
		self.arguments = arguments;
		self
	}

	pub fn with_argument(mut self, key: &str, value: impl Into<Value>) -> Self {
		self.arguments.insert(key, value);
		self
	}

	pub fn with_call(mut self, method: impl Into<String>, arguments: Arguments) -> Self {
		self.calls.push(MethodCall::new(method, arguments));
		self
	}

	pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.properties.insert(name.into(), value.into());
		self
	}

	pub fn with_public(mut self, public: bool) -> Self {
		self.public = public;
		self
	}

	/// Class name, possibly holding `%parameter%` placeholders.
	pub fn class(&self) -> Option<&str> {
		self.class.as_deref()
	}

	pub fn arguments(&self) -> &Arguments {
		&self.arguments
	}

	pub fn method_calls(&self) -> &[MethodCall] {
		&self.calls
	}

	pub fn properties(&self) -> &IndexMap<String, Value> {
		&self.properties
	}

	pub fn is_public(&self) -> bool {
		self.public
	}

	/// Number of setter calls since construction.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	pub fn set_class(&mut self, class: Option<String>) {
		self.class = class;
		self.touch();
	}

	pub fn set_arguments(&mut self, arguments: Arguments) {
		self.arguments = arguments;
		self.touch();
	}

	pub fn set_method_calls(&mut self, calls: Vec<MethodCall>) {
		self.calls = calls;
		self.touch();
	}

	pub fn add_method_call(&mut self, method: impl Into<String>, arguments: Arguments) {
		self.calls.push(MethodCall::new(method, arguments));
		self.touch();
	}

	pub fn set_properties(&mut self, properties: IndexMap<String, Value>) {
		self.properties = properties;
		self.touch();
	}

	pub fn set_public(&mut self, public: bool) {
		self.public = public;
		self.touch();
	}

	/// Mutable access to every nested value, for the recursive visitor.
	///
	/// Does not count as a revision of this definition.
	pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
		let calls = self.calls.iter_mut().flat_map(|call| call.arguments.values_mut());
		self.arguments.values_mut().chain(calls).chain(self.properties.values_mut())
	}

	fn touch(&mut self) {
		self.revision += 1;
	}
}
