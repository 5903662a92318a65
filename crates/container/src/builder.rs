use indexmap::IndexMap;

use crate::{Definition, ParameterBag, Resource, ResourceTracker, Value};

/// Registry of service definitions under compilation.
#[derive(Debug, Clone, Default)]
pub struct ContainerBuilder {
	pub(crate) definitions: IndexMap<String, Definition>,
	pub(crate) parameters: ParameterBag,
	pub(crate) resources: ResourceTracker,
}

impl ContainerBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_parameters(parameters: ParameterBag) -> Self {
		Self {
			parameters,
			..Self::default()
		}
	}

	/// Registers a service with a class and returns its definition for configuration.
	pub fn register(&mut self, id: impl Into<String>, class: impl Into<String>) -> &mut Definition {
		let id = id.into();
		self.definitions.insert(id.clone(), Definition::new(class));
		&mut self.definitions[&id]
	}

	/// Inserts or replaces a definition, returning the previous one.
	pub fn set_definition(&mut self, id: impl Into<String>, definition: Definition) -> Option<Definition> {
		self.definitions.insert(id.into(), definition)
	}

	pub fn definition(&self, id: &str) -> Option<&Definition> {
		self.definitions.get(id)
	}

	pub fn definition_mut(&mut self, id: &str) -> Option<&mut Definition> {
		self.definitions.get_mut(id)
	}

	pub fn has_definition(&self, id: &str) -> bool {
		self.definitions.contains_key(id)
	}

	pub fn remove_definition(&mut self, id: &str) -> Option<Definition> {
		self.definitions.shift_remove(id)
	}

	/// Definitions in registration order.
	pub fn definitions(&self) -> impl Iterator<Item = (&str, &Definition)> {
		self.definitions.iter().map(|(id, def)| (id.as_str(), def))
	}

	pub fn definition_ids(&self) -> impl Iterator<Item = &str> {
		self.definitions.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}

	pub fn parameter_bag(&self) -> &ParameterBag {
		&self.parameters
	}

	pub fn parameter_bag_mut(&mut self) -> &mut ParameterBag {
		&mut self.parameters
	}

	pub fn set_parameter(&mut self, name: &str, value: impl Into<Value>) {
		self.parameters.set(name, value);
	}

	pub fn is_tracking_resources(&self) -> bool {
		self.resources.is_enabled()
	}

	pub fn set_resource_tracking(&mut self, enabled: bool) {
		self.resources.set_enabled(enabled);
	}

	/// Records a build dependency; ignored unless tracking is on.
	pub fn add_resource(&mut self, resource: Resource) -> &mut Self {
		self.resources.add(resource);
		self
	}

	pub fn resources(&self) -> impl Iterator<Item = &Resource> {
		self.resources.resources().iter()
	}
}
